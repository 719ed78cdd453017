//! Invocation dispatcher
//!
//! Turns parsed options and positional arguments into a validated edit and
//! hands it to the edit engine. Every step is fail-fast: the first failure ends
//! the invocation and nothing after it runs.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{find_subcommand, DomainError, EditOperation, OptionValues, ParsedInvocation};
use crate::infrastructure::traits::{EditEngine, FileSystem};

/// Result of a successful dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchOutcome {
    pub subcommand: &'static str,
    pub operation: EditOperation,
    /// File written by the engine
    pub output: PathBuf,
}

/// Validates an invocation and invokes the edit engine.
pub struct Dispatcher {
    fs: Arc<dyn FileSystem>,
    engine: Arc<dyn EditEngine>,
}

impl Dispatcher {
    pub fn new(fs: Arc<dyn FileSystem>, engine: Arc<dyn EditEngine>) -> Self {
        Self { fs, engine }
    }

    /// Resolve, validate and run one invocation.
    ///
    /// Steps, in order:
    /// 1. exactly two positional arguments (subcommand, image path)
    /// 2. the subcommand is registered
    /// 3. the supplied options satisfy the subcommand's rule table
    /// 4. the image path is an existing file
    /// 5. the engine applies the edit; its error is returned unchanged
    #[instrument(skip(self))]
    pub fn dispatch(
        &self,
        positional: &[String],
        options: OptionValues,
    ) -> ApplicationResult<DispatchOutcome> {
        let invocation = Self::resolve(positional, options)?;
        let path = invocation.image_path();

        if !self.fs.is_file(path) {
            return Err(ApplicationError::FileNotFound(path.to_path_buf()));
        }
        debug!("dispatch: input {} exists", path.display());

        let operation = invocation.operation()?;
        debug!("dispatch: invoking engine with {:?}", operation);
        let output = self
            .engine
            .apply(&operation, path)
            .map_err(ApplicationError::engine)?;

        Ok(DispatchOutcome {
            subcommand: invocation.subcommand.name,
            operation,
            output,
        })
    }

    /// Steps 1-3: arity, lookup and option validation. Pure, no I/O, so it
    /// can run before any service is configured.
    pub fn resolve(
        positional: &[String],
        options: OptionValues,
    ) -> ApplicationResult<ParsedInvocation> {
        let [name, image_path] = positional else {
            return Err(ApplicationError::ArgumentMissing {
                found: positional.len(),
            });
        };

        let subcommand = find_subcommand(name)
            .ok_or_else(|| DomainError::UnsupportedSubcommand(name.clone()))?;
        debug!("resolve: subcommand {}", subcommand.name);

        subcommand.check(&options)?;
        debug!("resolve: options valid for {}", subcommand.name);

        Ok(ParsedInvocation {
            subcommand,
            options,
            positional: [name.clone(), image_path.clone()],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OptionName, OptionValue, ResizeTarget};
    use crate::infrastructure::error::EngineError;
    use std::path::Path;
    use std::sync::Mutex;

    struct FakeFs {
        files: Vec<PathBuf>,
    }

    impl FileSystem for FakeFs {
        fn is_file(&self, path: &Path) -> bool {
            self.files.iter().any(|p| p == path)
        }
    }

    #[derive(Default)]
    struct RecordingEngine {
        calls: Mutex<Vec<(EditOperation, PathBuf)>>,
        fail_with: Option<String>,
    }

    impl EditEngine for RecordingEngine {
        fn apply(&self, operation: &EditOperation, path: &Path) -> Result<PathBuf, EngineError> {
            self.calls
                .lock()
                .unwrap()
                .push((*operation, path.to_path_buf()));
            match &self.fail_with {
                Some(message) => Err(EngineError::InvalidGeometry(message.clone())),
                None => Ok(path.with_file_name("out.png")),
            }
        }
    }

    fn dispatcher_with(engine: Arc<RecordingEngine>) -> Dispatcher {
        let fs = Arc::new(FakeFs {
            files: vec![PathBuf::from("test.png")],
        });
        Dispatcher::new(fs, engine)
    }

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn given_valid_resize_when_dispatching_then_engine_receives_exact_size() {
        let engine = Arc::new(RecordingEngine::default());
        let dispatcher = dispatcher_with(engine.clone());
        let options = OptionValues::new()
            .with(OptionName::Width, OptionValue::Uint(500))
            .with(OptionName::Height, OptionValue::Uint(500));

        let outcome = dispatcher
            .dispatch(&args(&["resize", "test.png"]), options)
            .unwrap();

        let expected = EditOperation::Resize(ResizeTarget::Exact {
            width: 500,
            height: 500,
        });
        assert_eq!(outcome.operation, expected);
        assert_eq!(outcome.subcommand, "resize");
        assert_eq!(outcome.output, PathBuf::from("out.png"));
        assert_eq!(
            *engine.calls.lock().unwrap(),
            vec![(expected, PathBuf::from("test.png"))]
        );
    }

    #[test]
    fn given_no_services_when_resolving_then_rules_are_still_checked() {
        let options = OptionValues::new().with(OptionName::Width, OptionValue::Uint(500));

        let err = Dispatcher::resolve(&args(&["resize", "missing.png"]), options).unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::InvalidOptionCombination { .. })
        ));

        let invocation =
            Dispatcher::resolve(&args(&["grayscale", "missing.png"]), OptionValues::new()).unwrap();
        assert_eq!(invocation.subcommand.name, "grayscale");
        assert_eq!(invocation.image_path(), Path::new("missing.png"));
    }

    #[test]
    fn given_one_positional_when_dispatching_then_argument_missing() {
        let dispatcher = dispatcher_with(Arc::new(RecordingEngine::default()));
        let err = dispatcher
            .dispatch(&args(&["resize"]), OptionValues::new())
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ArgumentMissing { found: 1 }));
    }

    #[test]
    fn given_three_positionals_when_dispatching_then_argument_missing() {
        let dispatcher = dispatcher_with(Arc::new(RecordingEngine::default()));
        let err = dispatcher
            .dispatch(&args(&["grayscale", "test.png", "extra"]), OptionValues::new())
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ArgumentMissing { found: 3 }));
    }

    #[test]
    fn given_unknown_subcommand_when_dispatching_then_unsupported() {
        let dispatcher = dispatcher_with(Arc::new(RecordingEngine::default()));
        let err = dispatcher
            .dispatch(&args(&["rotate", "test.png"]), OptionValues::new())
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::UnsupportedSubcommand(ref name)) if name == "rotate"
        ));
    }

    #[test]
    fn given_invalid_options_and_missing_file_when_dispatching_then_options_fail_first() {
        let engine = Arc::new(RecordingEngine::default());
        let dispatcher = dispatcher_with(engine.clone());
        let options = OptionValues::new().with(OptionName::Width, OptionValue::Uint(500));

        let err = dispatcher
            .dispatch(&args(&["resize", "missing.png"]), options)
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::InvalidOptionCombination { .. })
        ));
        assert!(engine.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn given_missing_file_when_dispatching_then_file_not_found_and_engine_untouched() {
        let engine = Arc::new(RecordingEngine::default());
        let dispatcher = dispatcher_with(engine.clone());

        let err = dispatcher
            .dispatch(&args(&["grayscale", "missing.png"]), OptionValues::new())
            .unwrap_err();

        assert!(matches!(err, ApplicationError::FileNotFound(ref p) if p == Path::new("missing.png")));
        assert!(engine.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn given_engine_failure_when_dispatching_then_message_is_passed_through() {
        let engine = Arc::new(RecordingEngine {
            fail_with: Some("trim area starts outside the image".to_string()),
            ..Default::default()
        });
        let dispatcher = dispatcher_with(engine);

        let err = dispatcher
            .dispatch(&args(&["grayscale", "test.png"]), OptionValues::new())
            .unwrap_err();

        assert!(matches!(err, ApplicationError::Engine { .. }));
        assert_eq!(
            err.to_string(),
            EngineError::InvalidGeometry("trim area starts outside the image".to_string())
                .to_string()
        );
    }
}
