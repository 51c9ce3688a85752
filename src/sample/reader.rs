//! Reads flower records from line-oriented CSV input,
//! one `float,float,float,float,int` record per line.
use crate::errors::FloretError;
use super::Flower;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;


/// Reads every record from `reader` into a flower list.
/// Blank lines are skipped;
/// any malformed record aborts the read with the parse failure.
pub fn from_reader<R: BufRead>(reader: R) -> Result<Vec<Flower>, FloretError> {
    let mut flowers = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }

        flowers.push(line.parse::<Flower>()?);
    }
    Ok(flowers)
}


/// Reads a headerless CSV file into a flower list.
pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Flower>, FloretError> {
    let file = File::open(path)?;
    from_reader(BufReader::new(file))
}
