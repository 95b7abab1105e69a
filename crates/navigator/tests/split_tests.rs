use anyhow::Result;
use composite::{sample, Component};
use composite_navigator::{NavigationError, Navigator};
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

fn coordinates(count: i32) -> Vec<Component> {
    (1..=count)
        .map(|i| Component::leaf(if i % 2 == 1 { "YCOO" } else { "XCOO" }, i))
        .collect()
}

#[test]
fn test_split_coordinate_pairs() {
    let record = sample::record();
    let nav = Navigator::new(&record);

    let pairs = nav
        .descend_single("ROOT", |root| {
            root.descend_single("DSID", |dsid| {
                dsid.descend_single("TEST", |test| {
                    test.split(2)
                        .map(|pair| -> Result<(i32, i32)> {
                            Ok((pair.get_value("YCOO")?, pair.get_value("XCOO")?))
                        })
                        .collect::<Result<Vec<_>>>()
                })
            })
        })
        .unwrap();

    assert_eq!(pairs, vec![(1, 2), (3, 4), (5, 6), (7, 8)]);
}

#[test]
fn test_split_triples_snapshot() {
    let record = sample::record();
    let root = Navigator::new(&record).child("ROOT").unwrap();

    let rendered = root
        .descend_multiple("MRID", |mrid| -> Result<String> {
            let c3il = mrid.child("C3IL")?;
            let triples = c3il
                .split(3)
                .map(|t| -> Result<String> {
                    Ok(format!(
                        "({},{},{})",
                        t.get_value::<i32>("YCOO")?,
                        t.get_value::<i32>("XCOO")?,
                        t.get_value::<i32>("ZCOO")?
                    ))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(triples.join(" "))
        })
        .take(1)
        .collect::<Result<Vec<_>>>()
        .unwrap()
        .join("\n");

    assert_snapshot!(rendered, @"(1,2,3) (4,5,6) (7,8,9) (10,11,12) (13,14,15)");
}

#[test]
fn test_split_window_scopes() {
    let scope = coordinates(8);
    let nav = Navigator::new(&scope);

    let windows: Vec<Vec<i32>> = nav
        .split(2)
        .map(|window| {
            let mut values = window.get_values::<i32>("YCOO").unwrap();
            values.extend(window.get_values::<i32>("XCOO").unwrap());
            values
        })
        .collect();
    assert_eq!(
        windows,
        vec![vec![1, 2], vec![3, 4], vec![5, 6], vec![7, 8]]
    );
}

#[test]
fn test_split_keeps_partial_last_window() {
    let scope = coordinates(7);
    let nav = Navigator::new(&scope);

    let sizes: Vec<usize> = nav.split(3).map(|w| w.len()).collect();
    assert_eq!(sizes, vec![3, 3, 1]);

    let last = nav.split(3).last().unwrap();
    assert_eq!(last.get_value::<i32>("YCOO").unwrap(), 7);
    assert_eq!(
        last.get_value::<i32>("XCOO"),
        Err(NavigationError::Multiplicity {
            name: "XCOO".to_string(),
            found: 0
        })
    );
}

#[test]
fn test_split_zero_is_empty() {
    let scope = coordinates(4);
    let nav = Navigator::new(&scope);

    assert_eq!(nav.split(0).count(), 0);
    assert_eq!(nav.split(0).len(), 0);
}

#[test]
fn test_split_larger_than_scope() {
    let scope = coordinates(3);
    let nav = Navigator::new(&scope);

    let windows: Vec<_> = nav.split(10).collect();
    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].len(), 3);
}

#[test]
fn test_split_of_empty_scope() {
    let scope: Vec<Component> = Vec::new();
    let nav = Navigator::new(&scope);

    assert_eq!(nav.split(2).count(), 0);
}

#[test]
fn test_split_is_restartable() {
    let scope = coordinates(6);
    let nav = Navigator::new(&scope);

    let mut split = nav.split(2);
    assert_eq!(split.len(), 3);
    split.next();
    let resumed = split.clone();
    assert_eq!(split.len(), 2);
    assert_eq!(resumed.count(), 2);
    assert_eq!(nav.split(2).count(), 3);
}

#[test]
fn test_split_ignores_names() {
    let scope = vec![
        Component::leaf("A", 1),
        Component::composite("B"),
        Component::leaf("A", 2),
        Component::leaf("C", 3),
    ];
    let nav = Navigator::new(&scope);

    let windows: Vec<_> = nav.split(2).collect();
    assert!(std::ptr::eq(windows[0].scope(), &scope[0..2]));
    assert!(std::ptr::eq(windows[1].scope(), &scope[2..4]));

    // Windows are full navigators: descent works inside them
    assert!(windows[0].child("B").unwrap().is_empty());
}
