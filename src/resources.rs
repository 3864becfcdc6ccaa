//! Resource values and the recursive translation walk.
//!
//! A wrapped operation's result is modeled as a closed value tree: scalar,
//! self-translating carrier, ordered sequence, or key → value mapping,
//! nested to arbitrary depth. The walk is depth-first; carriers localize
//! themselves and are not descended into, mappings are walked by value
//! only (keys are identifiers, not user-facing text), scalars are left
//! untouched. The tree is owned, so cyclic graphs are unrepresentable and
//! the walk always terminates.

use std::collections::HashMap;
use std::fmt;

use crate::error::TranslationError;
use crate::translator::Translator;

/// A value that localizes its own textual fields given a translator.
///
/// The carrier owns its internal structure: the walker invokes the hook
/// once and does not descend further. Hooks must be idempotent.
pub trait ResourceCarrier: fmt::Debug {
    fn translate_resources(&mut self, translator: &Translator) -> Result<(), TranslationError>;
}

/// A leaf value with no translatable content.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

/// An operation result, as seen by the translation walk.
///
/// A value that is both a carrier and a collection is whichever variant it
/// was built as; building it as [`Resource::Carrier`] gives the hook
/// precedence over structural descent.
#[derive(Debug)]
pub enum Resource {
    /// No result at all; translating it is a no-op.
    Empty,
    Scalar(Scalar),
    Carrier(Box<dyn ResourceCarrier>),
    Sequence(Vec<Resource>),
    Mapping(HashMap<String, Resource>),
}

impl Resource {
    /// Wrap any carrier value.
    pub fn carrier(value: impl ResourceCarrier + 'static) -> Self {
        Resource::Carrier(Box::new(value))
    }

    /// Wrap a text scalar.
    pub fn text(value: impl Into<String>) -> Self {
        Resource::Scalar(Scalar::Text(value.into()))
    }

    /// Depth-first translation of every carrier reachable from this value.
    pub fn translate(&mut self, translator: &Translator) -> Result<(), TranslationError> {
        match self {
            Resource::Empty | Resource::Scalar(_) => Ok(()),
            Resource::Carrier(carrier) => carrier.translate_resources(translator),
            Resource::Sequence(items) => {
                for item in items {
                    item.translate(translator)?;
                }
                Ok(())
            }
            Resource::Mapping(entries) => {
                for value in entries.values_mut() {
                    value.translate(translator)?;
                }
                Ok(())
            }
        }
    }
}
