//! The translation pipeline: locale extraction, resolution, invocation,
//! and result/failure translation.
//!
//! The pipeline wraps an operation as a closure. Per invocation it scans
//! the call arguments for a locale hint, resolves a translator, runs the
//! operation, and either walks the result tree translating every carrier
//! in place or rebuilds the raised failure with the same kind and a
//! translated message. The pipeline performs no I/O of its own and holds
//! only immutable shared state, so any number of invocations may run
//! concurrently.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::config::Config;
use crate::error::{OperationFailure, TranslationError};
use crate::locales::{self, Locale};
use crate::messages::{MessageCatalog, loader};
use crate::resources::{Resource, Scalar};
use crate::translator::Translator;

/// The identifying user value an invocation may carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserContext {
    pub username: String,
    /// Raw, unvalidated locale code; resolved per invocation.
    pub locale_code: String,
}

impl UserContext {
    pub fn new(username: impl Into<String>, locale_code: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            locale_code: locale_code.into(),
        }
    }
}

/// One argument of a wrapped invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum ContextArg {
    /// An identifying user value carrying a locale hint.
    User(UserContext),
    /// Any other argument; opaque to the pipeline.
    Data(Scalar),
}

/// The wrapped invocation's arguments, in call order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvocationContext {
    args: Vec<ContextArg>,
}

impl InvocationContext {
    pub fn new(args: Vec<ContextArg>) -> Self {
        Self { args }
    }

    pub fn args(&self) -> &[ContextArg] {
        &self.args
    }

    /// The raw locale code of the first user argument, if any.
    pub fn locale_hint(&self) -> Option<&str> {
        self.args.iter().find_map(|arg| match arg {
            ContextArg::User(user) => Some(user.locale_code.as_str()),
            ContextArg::Data(_) => None,
        })
    }
}

/// Wraps operations so their results come back localized and their
/// failures come back with translated messages and unchanged kinds.
#[derive(Debug, Clone)]
pub struct TranslationPipeline {
    default_locale: Option<Locale>,
    messages: Arc<MessageCatalog>,
}

impl TranslationPipeline {
    /// Build a pipeline from configuration and a loaded message catalog.
    ///
    /// The default locale code is resolved eagerly: an unresolvable
    /// default is rejected here, before any invocation runs.
    pub fn new(config: &Config, messages: Arc<MessageCatalog>) -> Result<Self, TranslationError> {
        let default_locale = match &config.default_locale {
            Some(code) => Some(locales::resolve(code)?),
            None => None,
        };

        Ok(Self {
            default_locale,
            messages,
        })
    }

    /// Build a pipeline by loading every bundle under the configured
    /// messages root.
    ///
    /// Unloadable bundle files are skipped with a logged warning, exactly
    /// as [`loader::load_dir`] reports them.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let loaded = loader::load_dir(Path::new(&config.messages_root))?;
        Ok(Self::new(config, Arc::new(loaded.catalog))?)
    }

    /// Replace the default locale.
    ///
    /// Configuration-phase only: this takes `&mut self`, so no concurrent
    /// invocation can observe a half-written default.
    pub fn set_default_locale(&mut self, code: &str) -> Result<(), TranslationError> {
        self.default_locale = Some(locales::resolve(code)?);
        Ok(())
    }

    pub fn default_locale(&self) -> Option<&Locale> {
        self.default_locale.as_ref()
    }

    /// Resolve the invocation context to a ready translator without
    /// invoking anything.
    ///
    /// The hint wins over the configured default; no hint and no default
    /// is a configuration failure.
    pub fn translator_for(
        &self,
        context: &InvocationContext,
    ) -> Result<Translator, TranslationError> {
        let locale = match context.locale_hint() {
            Some(hint) => {
                debug!(hint, "resolving locale hint from invocation arguments");
                locales::resolve(hint)?
            }
            None => match &self.default_locale {
                Some(locale) => {
                    debug!(locale = locale.key(), "no locale hint, using configured default");
                    locale.clone()
                }
                None => return Err(TranslationError::MissingLocaleConfiguration),
            },
        };

        Ok(Translator::new(locale, Arc::clone(&self.messages)))
    }

    /// Run `operation` and localize its outcome.
    ///
    /// Success values are walked in place and returned. Failures are
    /// rebuilt with the same kind and a translated message. Resolution and
    /// configuration failures propagate untranslated: when they occur no
    /// translator exists yet.
    pub fn run<F>(
        &self,
        context: &InvocationContext,
        operation: F,
    ) -> Result<Resource, TranslationError>
    where
        F: FnOnce() -> Result<Resource, OperationFailure>,
    {
        let translator = self.translator_for(context)?;

        match operation() {
            Ok(mut result) => {
                result.translate(&translator)?;
                Ok(result)
            }
            Err(failure) => {
                debug!(kind = %failure.kind, "translating failure raised by wrapped operation");
                Err(TranslationError::Failure(
                    translator.translate_failure(failure),
                ))
            }
        }
    }
}
