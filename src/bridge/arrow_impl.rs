// In: src/bridge/arrow_impl.rs

//! Adapts Arrow arrays into classifiable host values.
//!
//! Arrow has no class annotations of its own, so they travel either alongside
//! the array (`with_class`) or in field/schema metadata under the `class` key,
//! encoded as a JSON array of strings.

use std::collections::HashMap;
use std::sync::Arc;

use arrow::array::{Array, ArrayRef, RecordBatch, StructArray};
use arrow::datatypes::{DataType, Field};
use arrow::error::ArrowError;

use crate::config::MarkerClasses;
use crate::error::{Result, VctypeError};
use crate::traits::ClassifiableValue;
use crate::types::RepresentationKind;

/// Metadata key holding a JSON-encoded class vector.
pub const CLASS_METADATA_KEY: &str = "class";

/// Maps an Arrow `DataType` onto the representation kinds the classifier knows.
///
/// Dictionary arrays are integer codes over a set of levels, so they count as
/// integer arrays. Decimals and the temporal types (dates, timestamps, times,
/// durations) are numeric measurements and count as float arrays, the way
/// `Date`, `POSIXct` and `difftime` are doubles. Binary arrays and maps are
/// sequences of nested values.
pub fn representation_kind_of(data_type: &DataType) -> RepresentationKind {
    match data_type {
        DataType::Boolean => RepresentationKind::BooleanArray,
        DataType::Int8
        | DataType::Int16
        | DataType::Int32
        | DataType::Int64
        | DataType::UInt16
        | DataType::UInt32
        | DataType::UInt64
        | DataType::Dictionary(_, _) => RepresentationKind::IntegerArray,
        DataType::UInt8 => RepresentationKind::ByteArray,
        DataType::Float16
        | DataType::Float32
        | DataType::Float64
        | DataType::Decimal128(_, _)
        | DataType::Decimal256(_, _)
        | DataType::Date32
        | DataType::Date64
        | DataType::Timestamp(_, _)
        | DataType::Time32(_)
        | DataType::Time64(_)
        | DataType::Duration(_) => RepresentationKind::FloatArray,
        DataType::Utf8 | DataType::LargeUtf8 | DataType::Utf8View => {
            RepresentationKind::StringArray
        }
        DataType::List(_)
        | DataType::LargeList(_)
        | DataType::ListView(_)
        | DataType::LargeListView(_)
        | DataType::FixedSizeList(_, _)
        | DataType::Struct(_)
        | DataType::Map(_, _)
        | DataType::Binary
        | DataType::LargeBinary
        | DataType::BinaryView => RepresentationKind::GenericSequence,
        _ => RepresentationKind::Other,
    }
}

/// An Arrow array together with its class annotation.
#[derive(Debug, Clone)]
pub struct ArrowValue {
    array: ArrayRef,
    class: Vec<String>,
}

impl ArrowValue {
    /// An unclassed value.
    pub fn new(array: ArrayRef) -> Self {
        Self {
            array,
            class: Vec::new(),
        }
    }

    pub fn with_class<I, S>(mut self, class: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.class = class.into_iter().map(Into::into).collect();
        self
    }

    /// Builds a value from a column and its schema field, reading the class
    /// annotation from the field's metadata.
    pub fn from_field(array: ArrayRef, field: &Field) -> Result<Self> {
        if array.data_type() != field.data_type() {
            return Err(VctypeError::Arrow(ArrowError::SchemaError(format!(
                "field `{}` is declared as {} but the array is {}",
                field.name(),
                field.data_type(),
                array.data_type()
            ))));
        }
        let class = parse_class_metadata(field.metadata(), field.name())?.unwrap_or_default();
        Ok(Self { array, class })
    }

    /// Views a record batch as a data frame: a struct-backed sequence whose
    /// class comes from the schema metadata, or `data.frame` when absent.
    pub fn from_record_batch(batch: &RecordBatch) -> Result<Self> {
        let schema = batch.schema();
        let class = match parse_class_metadata(schema.metadata(), "<schema>")? {
            Some(class) => class,
            None => vec![MarkerClasses::default().data_frame],
        };
        let array: ArrayRef = Arc::new(StructArray::from(batch.clone()));
        Ok(Self { array, class })
    }

    pub fn array(&self) -> &ArrayRef {
        &self.array
    }
}

impl ClassifiableValue for ArrowValue {
    fn representation_kind(&self) -> RepresentationKind {
        representation_kind_of(self.array.data_type())
    }

    fn class_names(&self) -> &[String] {
        &self.class
    }

    fn as_arrow(&self) -> Option<&ArrayRef> {
        Some(&self.array)
    }
}

fn parse_class_metadata(
    metadata: &HashMap<String, String>,
    owner: &str,
) -> Result<Option<Vec<String>>> {
    let Some(raw) = metadata.get(CLASS_METADATA_KEY) else {
        return Ok(None);
    };
    serde_json::from_str::<Vec<String>>(raw)
        .map(Some)
        .map_err(|e| {
            VctypeError::InvalidMetadata(format!(
                "`{}` metadata on {} must be a JSON array of strings: {}",
                CLASS_METADATA_KEY, owner, e
            ))
        })
}
