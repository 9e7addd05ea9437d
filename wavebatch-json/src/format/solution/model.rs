use crate::format::Id;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Error, ErrorKind, Read, Write};

/// A picked article.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Item {
    /// An order id.
    #[serde(rename = "OrderId")]
    pub order_id: Id,
    /// An article id.
    #[serde(rename = "ArticleId")]
    pub article_id: Id,
}

/// A batch of articles picked within one tour.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Batch {
    /// A batch id.
    #[serde(rename = "BatchId")]
    pub id: usize,
    /// Picked articles.
    #[serde(rename = "Items")]
    pub items: Vec<Item>,
    /// Total volume of picked articles.
    #[serde(rename = "BatchVolume")]
    pub volume: u64,
}

/// A wave of orders.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Wave {
    /// A wave id.
    #[serde(rename = "WaveId")]
    pub id: usize,
    /// Ids of batches which pick articles of the wave.
    #[serde(rename = "BatchIds")]
    pub batch_ids: Vec<usize>,
    /// Ids of orders in the wave.
    #[serde(rename = "OrderIds")]
    pub order_ids: Vec<Id>,
    /// Total amount of ordered articles in the wave.
    #[serde(rename = "WaveSize")]
    pub size: usize,
}

/// A solution definition.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Solution {
    /// Waves.
    #[serde(rename = "Waves")]
    pub waves: Vec<Wave>,
    /// Batches.
    #[serde(rename = "Batches")]
    pub batches: Vec<Batch>,
}

/// Serializes solution into json format.
pub fn serialize_solution<W: Write>(solution: &Solution, writer: &mut BufWriter<W>) -> Result<(), Error> {
    serde_json::to_writer_pretty(writer, solution).map_err(Error::from)
}

/// Deserializes solution from json format.
pub fn deserialize_solution<R: Read>(reader: BufReader<R>) -> Result<Solution, Error> {
    serde_json::from_reader(reader).map_err(|err| Error::new(ErrorKind::InvalidData, err))
}
