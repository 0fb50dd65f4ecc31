use std::io::Read;

use serde::Deserialize;

/// One raw row of the TOI report before domain conversion.
#[derive(Debug)]
pub(crate) struct ToiRecord {
    pub(crate) player: String,
    pub(crate) position: String,
    pub(crate) shift_seconds: f32,
    pub(crate) ice_rating: f32,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<ToiRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<ToiRow>() {
        let row = record?;
        records.push(ToiRecord {
            player: row.player,
            position: row.position,
            shift_seconds: row.shift_sec,
            ice_rating: row.ice_rating,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct ToiRow {
    #[serde(rename = "Player")]
    player: String,
    #[serde(rename = "Position")]
    position: String,
    #[serde(rename = "Shift_Sec")]
    shift_sec: f32,
    #[serde(rename = "Ice_Rating")]
    ice_rating: f32,
}
