//! Walks the sample record with a navigator and prints what it decodes
//!
//! Set `RUST_LOG=trace` to see every descent and split.

use anyhow::{Context, Result};
use composite::prelude::*;
use log::info;

fn main() -> Result<()> {
    env_logger::init();

    let record = sample::record();
    let nav = Navigator::new(&record);
    info!("Loaded sample record with {} top-level elements", nav.len());

    let elements: Vec<i32> = (1..=5)
        .map(|i| nav.get_value::<i32>(&format!("ELM{}", i)))
        .collect::<Result<_, _>>()?;
    println!("ELM1..ELM5: {:?}", elements);
    println!("Repeat: {:?}", nav.get_values::<i32>("Repeat")?);

    nav.descend_single("ROOT", |root| -> Result<()> {
        root.descend_single("DSID", |dsid| -> Result<()> {
            println!(
                "DSID: RCNM={} RCID={} ENSP={} ENED={} PRED={:?}",
                dsid.get_value::<u32>("RCNM")?,
                dsid.get_value::<u32>("RCID")?,
                dsid.get_value::<u32>("ENSP")?,
                dsid.get_value::<u32>("ENED")?,
                dsid.get_value::<String>("PRED")?,
            );

            let pairs = dsid.descend_single("TEST", |test| {
                test.split(2)
                    .map(|pair| -> Result<(i32, i32)> {
                        Ok((pair.get_value("YCOO")?, pair.get_value("XCOO")?))
                    })
                    .collect::<Result<Vec<_>>>()
            })?;
            println!("TEST: {:?}", pairs);
            Ok(())
        })
        .context("Failed to decode DSID")?;

        let point = root.descend_single("PRID", |prid| {
            prid.descend_single("C2IT", |c2it| -> Result<(i32, i32)> {
                Ok((c2it.get_value("YCOO")?, c2it.get_value("XCOO")?))
            })
        })?;
        println!("PRID/C2IT: {:?}", point);

        for (index, triples) in root
            .descend_multiple("MRID", |mrid| {
                mrid.descend_single("C3IL", |c3il| {
                    c3il.split(3)
                        .map(|triple| -> Result<[i32; 3]> {
                            Ok([
                                triple.get_value("YCOO")?,
                                triple.get_value("XCOO")?,
                                triple.get_value("ZCOO")?,
                            ])
                        })
                        .collect::<Result<Vec<_>>>()
                })
            })
            .enumerate()
        {
            let triples = triples.with_context(|| format!("Failed to decode MRID #{}", index))?;
            println!("MRID #{} C3IL: {:?}", index, triples);
        }

        Ok(())
    })?;

    Ok(())
}
