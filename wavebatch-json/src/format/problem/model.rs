use crate::format::{FormatError, Id, MultiFormatError};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Error, Read, Write};

/// An article with its volume.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Article {
    /// An article id.
    #[serde(rename = "ArticleId")]
    pub id: Id,
    /// A volume of a single article.
    #[serde(rename = "Volume")]
    pub volume: u64,
}

/// A location of an article.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ArticleLocation {
    /// An article id.
    #[serde(rename = "ArticleId")]
    pub article_id: Id,
    /// A warehouse id.
    #[serde(rename = "Warehouse")]
    pub warehouse: Id,
    /// An aisle id, unique within the warehouse.
    #[serde(rename = "Aisle")]
    pub aisle: Id,
}

/// A customer order.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Order {
    /// An order id.
    #[serde(rename = "OrderId")]
    pub id: Id,
    /// Ordered articles, an article can be ordered more than once.
    #[serde(rename = "ArticleIds")]
    pub article_ids: Vec<Id>,
}

/// A problem definition.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Problem {
    /// Article catalog.
    #[serde(rename = "Articles")]
    pub articles: Vec<Article>,
    /// Article locations.
    #[serde(rename = "ArticleLocations")]
    pub locations: Vec<ArticleLocation>,
    /// Customer orders.
    #[serde(rename = "Orders")]
    pub orders: Vec<Order>,
}

/// Deserializes problem in json format from `BufReader`.
pub fn deserialize_problem<R: Read>(reader: BufReader<R>) -> Result<Problem, MultiFormatError> {
    serde_json::from_reader(reader).map_err(|err| {
        FormatError::new(
            "E0000".to_string(),
            "cannot deserialize problem".to_string(),
            format!("check input json: '{err}'"),
        )
        .into()
    })
}

/// Serializes `problem` in json to `writer`.
pub fn serialize_problem<W: Write>(problem: &Problem, writer: &mut BufWriter<W>) -> Result<(), Error> {
    serde_json::to_writer_pretty(writer, problem).map_err(Error::from)
}
