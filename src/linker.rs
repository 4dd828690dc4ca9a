use tracing::debug;

use crate::error::{ConfigError, Error};
use crate::host::HostProject;
use crate::model::ModelHandle;

/// Linker lifecycle: created in `Scheduled`, moved to `Executed` by the
/// host's evaluation-complete signal. `Executed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkerState {
    Scheduled,
    Executed,
}

/// One-shot callback that pushes configuration the toolchain can only
/// accept after its own post-evaluation setup has run.
///
/// While scheduled it holds nothing but a shared handle to the model and
/// makes no toolchain calls. It observes model state; it never recreates
/// it.
#[derive(Debug)]
pub struct DeferredLinker {
    model: ModelHandle,
    state: LinkerState,
}

impl DeferredLinker {
    pub fn new(model: ModelHandle) -> Self {
        Self {
            model,
            state: LinkerState::Scheduled,
        }
    }

    pub fn state(&self) -> LinkerState {
        self.state
    }

    /// Push the model's post-evaluation values into the toolchain.
    ///
    /// Runs exactly once per project. A second evaluation-complete signal
    /// fails instead of re-linking.
    pub fn execute(&mut self, project: &mut dyn HostProject) -> Result<(), Error> {
        if self.state == LinkerState::Executed {
            return Err(ConfigError::LinkerRetriggered.into());
        }
        self.state = LinkerState::Executed;

        debug!("linking configuration model into toolchain");
        let model = self.model.borrow();
        if let Some(jdk) = model.jdk_version() {
            project.set_property("jdkVersion", &jdk.to_string())?;
        }
        if let Some(sdk) = model.compile_sdk() {
            project.set_property("compileSdk", &sdk.to_string())?;
        }
        Ok(())
    }
}
