//! A sample record shaped like a chart data set
//!
//! ```text
//! ROOT
//!   - DSID
//!       - RCNM (1u) RCID (2u) ENSP (3u) ENED (4u) PRED ("test string")
//!       - TEST: YCOO/XCOO pairs 1..=8
//!   - PRID
//!       - C2IT: YCOO (4) XCOO (-4)
//!   - MRID (three times)
//!       - C3IL: YCOO/XCOO/ZCOO triples 1..=15
//! ELM1..ELM5 (101..105)
//! Repeat (1..=6)
//! ```

use crate::component::Component;

/// The dataset identification group
pub fn dsid() -> Component {
    let test = (1..=8).fold(Component::composite("TEST"), |test, i| {
        let name = if i % 2 == 1 { "YCOO" } else { "XCOO" };
        test.with_child(Component::leaf(name, i))
    });

    Component::composite("DSID")
        .with_child(Component::leaf("RCNM", 1u32))
        .with_child(Component::leaf("RCID", 2u32))
        .with_child(Component::leaf("ENSP", 3u32))
        .with_child(Component::leaf("ENED", 4u32))
        .with_child(Component::leaf("PRED", "test string"))
        .with_child(test)
}

/// A point record with a single 2D coordinate
pub fn prid() -> Component {
    let c2it = Component::composite("C2IT")
        .with_child(Component::leaf("YCOO", 4))
        .with_child(Component::leaf("XCOO", -4));

    Component::composite("PRID").with_child(c2it)
}

/// A multipoint record with five 3D coordinates
pub fn mrid() -> Component {
    let axes = ["YCOO", "XCOO", "ZCOO"];
    let c3il = (1..=15).fold(Component::composite("C3IL"), |c3il, i: i32| {
        c3il.with_child(Component::leaf(axes[(i as usize - 1) % 3], i))
    });

    Component::composite("MRID").with_child(c3il)
}

/// The full sample: ROOT followed by the top-level leaves
pub fn record() -> Vec<Component> {
    let root = Component::composite("ROOT")
        .with_child(dsid())
        .with_child(prid())
        .with_child(mrid())
        .with_child(mrid())
        .with_child(mrid());

    let mut record = vec![root];
    record.extend((1..=5).map(|i| Component::leaf(format!("ELM{}", i), 100 + i)));
    record.extend((1..=6).map(|i| Component::leaf("Repeat", i)));
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use composite_navigator::Value;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_record_shape() {
        let record = record();
        assert_eq!(record.len(), 12);
        assert_eq!(record[0].name(), "ROOT");
        assert_eq!(record[0].children().map(<[Component]>::len), Some(5));
        assert_eq!(record[5].name(), "ELM5");
        assert_eq!(record[5].value(), Some(&Value::Int(105)));
        assert_eq!(record[11].name(), "Repeat");
    }

    #[test]
    fn test_dsid_test_group() {
        let dsid = dsid();
        let test = dsid.children().and_then(|c| c.last()).unwrap();
        assert_eq!(test.name(), "TEST");
        assert_eq!(test.operate(), 4 * 8);
    }

    #[test]
    fn test_mrid_axes_cycle() {
        let mrid = mrid();
        let c3il = &mrid.children().unwrap()[0];
        let names: Vec<&str> = c3il.children().unwrap().iter().map(Component::name).collect();
        assert_eq!(names.len(), 15);
        assert_eq!(&names[..4], &["YCOO", "XCOO", "ZCOO", "YCOO"]);
    }
}
