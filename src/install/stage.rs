//! The installation state machine.
//!
//! [`Stage`] enumerates the fixed pipeline and [`InstallationAttempt`] tracks
//! one run through it. The `check_*` functions classify the outcome of each
//! stage from what its child process produced; they perform no I/O so the
//! sequencing can be tested without spawning anything.

use super::{InstallError, InstallReport};
use crate::config::{ToolConfig, STAGE_TIMEOUT_ENV};
use crate::host::{CommandOutput, StructuredCommand};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;
use strum::IntoEnumIterator;

/// One step of the installation pipeline.
///
/// Stages are totally ordered and run strictly in declaration order.
///
/// # Example
///
/// ```rust
/// use smart_commits_shim::Stage;
///
/// assert_eq!(Stage::LocateRuntime.next(), Some(Stage::LocatePackageManager));
/// assert_eq!(Stage::Verify.next(), None);
/// assert_eq!(Stage::all().count(), 4);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Stage {
    /// Find a runtime command on the host.
    LocateRuntime,
    /// Ask the runtime for its package manager's version.
    LocatePackageManager,
    /// Install the pinned requirement.
    Install,
    /// Run the installed tool's version flag.
    Verify,
}

impl Stage {
    /// The stage that follows this one, `None` after the last.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::LocateRuntime => Some(Self::LocatePackageManager),
            Self::LocatePackageManager => Some(Self::Install),
            Self::Install => Some(Self::Verify),
            Self::Verify => None,
        }
    }

    /// Human-readable description of the stage.
    pub fn description(&self) -> &'static str {
        match self {
            Self::LocateRuntime => "Locating runtime",
            Self::LocatePackageManager => "Locating package manager",
            Self::Install => "Installing",
            Self::Verify => "Verifying installation",
        }
    }

    /// Iterator over all stages in pipeline order.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}

/// The runtime command picked in [`Stage::LocateRuntime`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRuntime {
    /// The candidate name that matched (e.g., "python3").
    pub command: String,
    /// Where it resolved to.
    pub path: PathBuf,
}

/// Where an attempt ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Still running.
    Pending,
    /// Every stage succeeded.
    Succeeded(InstallReport),
    /// A stage failed; later stages were skipped.
    Failed(InstallError),
}

impl Outcome {
    /// The final result, or `None` while the attempt is still running.
    pub fn result(&self) -> Option<Result<InstallReport, InstallError>> {
        match self {
            Self::Pending => None,
            Self::Succeeded(report) => Some(Ok(report.clone())),
            Self::Failed(error) => Some(Err(error.clone())),
        }
    }
}

/// One run of the installation workflow.
///
/// The stage only moves forward. A failure at any stage finishes the
/// attempt immediately, and a finished attempt accepts no further results.
/// Success is recorded once, after [`Stage::Verify`], with the report.
///
/// # Example
///
/// ```rust
/// use smart_commits_shim::{InstallationAttempt, Outcome, Stage, ToolConfig};
///
/// let mut attempt = InstallationAttempt::new(&ToolConfig::default());
/// assert_eq!(attempt.stage(), Stage::LocateRuntime);
///
/// assert!(attempt.record(Ok(())));
/// assert_eq!(attempt.stage(), Stage::LocatePackageManager);
/// assert_eq!(attempt.outcome(), &Outcome::Pending);
/// ```
#[derive(Debug, Clone)]
pub struct InstallationAttempt {
    tool_name: String,
    version: String,
    resolved_runtime: Option<ResolvedRuntime>,
    stage: Stage,
    outcome: Outcome,
}

impl InstallationAttempt {
    /// Start a fresh attempt at the first stage.
    pub fn new(config: &ToolConfig) -> Self {
        Self {
            tool_name: config.tool_name.clone(),
            version: config.version.clone(),
            resolved_runtime: None,
            stage: Stage::LocateRuntime,
            outcome: Outcome::Pending,
        }
    }

    /// Package being installed.
    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    /// Pinned version being installed.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Current stage. After the attempt finishes this is the last stage
    /// that ran.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Current outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Runtime found by the first stage, once it has succeeded.
    pub fn resolved_runtime(&self) -> Option<&ResolvedRuntime> {
        self.resolved_runtime.as_ref()
    }

    /// Whether the attempt has succeeded or failed.
    pub fn is_finished(&self) -> bool {
        !matches!(self.outcome, Outcome::Pending)
    }

    /// Remember the runtime picked by [`Stage::LocateRuntime`].
    ///
    /// Ignored outside that stage.
    pub fn set_resolved_runtime(&mut self, runtime: ResolvedRuntime) {
        if self.stage == Stage::LocateRuntime && !self.is_finished() {
            self.resolved_runtime = Some(runtime);
        }
    }

    /// Record the result of the current stage.
    ///
    /// `Ok` advances to the next stage. `Err` finishes the attempt as failed.
    /// The last stage succeeds through [`succeed`](Self::succeed) instead, so
    /// `Ok` there is rejected.
    ///
    /// Returns `false` and leaves the attempt untouched if the result was
    /// rejected.
    pub fn record(&mut self, result: Result<(), &InstallError>) -> bool {
        if self.is_finished() {
            tracing::warn!(stage = ?self.stage, "result recorded on a finished attempt");
            return false;
        }

        match result {
            Ok(()) => match self.stage.next() {
                Some(next) => {
                    tracing::debug!(stage = self.stage.description(), "stage complete");
                    self.stage = next;
                }
                None => {
                    tracing::warn!(stage = ?self.stage, "last stage needs a report to succeed");
                    return false;
                }
            },
            Err(error) => {
                tracing::debug!(stage = ?self.stage, %error, "attempt failed");
                self.outcome = Outcome::Failed(error.clone());
            }
        }
        true
    }

    /// Finish the attempt successfully.
    ///
    /// Only accepted while [`Stage::Verify`] is still pending; returns `false`
    /// otherwise.
    pub fn succeed(&mut self, report: InstallReport) -> bool {
        if self.is_finished() || self.stage.next().is_some() {
            tracing::warn!(stage = ?self.stage, "success recorded before the last stage");
            return false;
        }
        tracing::debug!(stage = ?self.stage, "attempt succeeded");
        self.outcome = Outcome::Succeeded(report);
        true
    }
}

fn describe_exit(exit_code: Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("exited with code {}", code),
        None => "terminated by a signal".to_string(),
    }
}

/// Failure for a stage that started but never reported back, for example
/// because the future driving it was dropped.
pub fn interrupted(config: &ToolConfig, attempt: &InstallationAttempt) -> InstallError {
    let reason = "interrupted before the stage finished".to_string();
    let fix = "Start a new installation".to_string();
    match attempt.stage() {
        Stage::LocateRuntime => InstallError::RuntimeNotFound {
            label: config.runtime.label.clone(),
            candidates: config.runtime.candidates.clone(),
            fix,
        },
        Stage::LocatePackageManager => InstallError::PackageManagerNotFound {
            label: config.package_manager.label.clone(),
            runtime: attempt
                .resolved_runtime()
                .map_or_else(|| config.runtime.label.clone(), |r| r.command.clone()),
            exit_code: None,
            reason,
            fix,
        },
        Stage::Install => InstallError::InstallFailed {
            requirement: config.requirement(),
            exit_code: None,
            reason,
            fix,
        },
        Stage::Verify => InstallError::VerificationFailed {
            tool: config.executable.clone(),
            exit_code: None,
            reason,
            fix,
        },
    }
}

fn timeout_fix() -> String {
    format!("Allow more time by raising {}", STAGE_TIMEOUT_ENV)
}

/// Pick the first candidate runtime that resolves.
///
/// Candidates are probed in order and probing stops at the first hit; later
/// candidates are never looked up.
pub fn resolve_runtime<F>(config: &ToolConfig, mut locate: F) -> Result<ResolvedRuntime, InstallError>
where
    F: FnMut(&str) -> Option<PathBuf>,
{
    config
        .runtime
        .candidates
        .iter()
        .find_map(|candidate| {
            locate(candidate).map(|path| ResolvedRuntime {
                command: candidate.clone(),
                path,
            })
        })
        .ok_or_else(|| InstallError::RuntimeNotFound {
            label: config.runtime.label.clone(),
            candidates: config.runtime.candidates.clone(),
            fix: format!(
                "Install {} from {}",
                config.runtime.label, config.runtime.install_url
            ),
        })
}

/// `<runtime> -m pip --version`
pub fn package_manager_probe(config: &ToolConfig, runtime: &ResolvedRuntime) -> StructuredCommand {
    let mut args = config.package_manager.runtime_args.clone();
    args.push("--version".to_string());
    StructuredCommand::new(runtime.path.clone(), args)
}

/// `<runtime> -m pip install <tool>==<version>`
pub fn install_command(config: &ToolConfig, runtime: &ResolvedRuntime) -> StructuredCommand {
    let mut args = config.package_manager.runtime_args.clone();
    args.push("install".to_string());
    args.push(config.requirement());
    StructuredCommand::new(runtime.path.clone(), args)
}

/// `<tool> --version`
pub fn verification_command(tool: PathBuf) -> StructuredCommand {
    StructuredCommand::new(tool, ["--version"])
}

/// Classify the package manager probe. Returns its version line.
pub fn check_package_manager(
    config: &ToolConfig,
    runtime: &ResolvedRuntime,
    result: io::Result<CommandOutput>,
) -> Result<String, InstallError> {
    let failure = |exit_code: Option<i32>, reason: String, fix: String| InstallError::PackageManagerNotFound {
        label: config.package_manager.label.clone(),
        runtime: runtime.command.clone(),
        exit_code,
        reason,
        fix,
    };
    let install_fix = || {
        format!(
            "Install {} for {} (for example: {} -m ensurepip --upgrade)",
            config.package_manager.label, runtime.command, runtime.command
        )
    };

    let output = result.map_err(|e| {
        let fix = if e.kind() == io::ErrorKind::TimedOut {
            timeout_fix()
        } else {
            install_fix()
        };
        failure(None, e.to_string(), fix)
    })?;
    if !output.success() {
        let detail = output.stderr.trim();
        let reason = if detail.is_empty() {
            describe_exit(output.exit_code)
        } else {
            format!("{} ({})", describe_exit(output.exit_code), detail)
        };
        return Err(failure(output.exit_code, reason, install_fix()));
    }

    Ok(output.primary_text().trim().to_string())
}

/// Classify the install step from the package manager's exit code.
pub fn check_install(config: &ToolConfig, result: io::Result<Option<i32>>) -> Result<(), InstallError> {
    let requirement = config.requirement();
    match result {
        Ok(Some(0)) => Ok(()),
        Ok(exit_code) => Err(InstallError::InstallFailed {
            requirement,
            exit_code,
            reason: describe_exit(exit_code),
            fix: format!(
                "See the {} output above for details",
                config.package_manager.label
            ),
        }),
        Err(e) => {
            let fix = if e.kind() == io::ErrorKind::TimedOut {
                format!("Check your internet connection. {}", timeout_fix())
            } else {
                format!("Check that {} can be started", config.runtime.label)
            };
            Err(InstallError::InstallFailed {
                requirement,
                exit_code: None,
                reason: e.to_string(),
                fix,
            })
        }
    }
}

/// Classify where the installed tool was found.
///
/// An explicit executable override always wins over lookup.
pub fn check_tool_location(config: &ToolConfig, located: Option<PathBuf>) -> Result<PathBuf, InstallError> {
    if let Some(path) = &config.executable_override {
        return Ok(path.clone());
    }
    located.ok_or_else(|| InstallError::VerificationFailed {
        tool: config.executable.clone(),
        exit_code: None,
        reason: "not found on PATH after installation".to_string(),
        fix: format!(
            "Make sure the {} scripts directory is on your PATH, then restart your terminal",
            config.package_manager.label
        ),
    })
}

/// Classify the verification run. Returns the version output trimmed of
/// surrounding whitespace.
pub fn check_verification(config: &ToolConfig, result: io::Result<CommandOutput>) -> Result<String, InstallError> {
    let failure = |exit_code: Option<i32>, reason: String, fix: String| InstallError::VerificationFailed {
        tool: config.executable.clone(),
        exit_code,
        reason,
        fix,
    };
    let manual_fix = || format!("Run `{} --version` manually to see what went wrong", config.executable);

    let output = result.map_err(|e| {
        let fix = if e.kind() == io::ErrorKind::TimedOut {
            timeout_fix()
        } else {
            manual_fix()
        };
        failure(None, e.to_string(), fix)
    })?;
    if !output.success() {
        return Err(failure(output.exit_code, describe_exit(output.exit_code), manual_fix()));
    }

    Ok(output.primary_text().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::Path;

    fn runtime() -> ResolvedRuntime {
        ResolvedRuntime {
            command: "python3".to_string(),
            path: PathBuf::from("/usr/bin/python3"),
        }
    }

    fn report() -> InstallReport {
        InstallReport {
            tool_name: "smart-commits-ai".to_string(),
            version: "1.0.4".to_string(),
            runtime: runtime(),
            package_manager_version: "pip 24.0".to_string(),
            verification: "smart-commits-ai 1.0.4".to_string(),
            installed_version: None,
        }
    }

    fn timed_out() -> io::Error {
        io::Error::new(io::ErrorKind::TimedOut, "timed out after 1s")
    }

    fn output(exit_code: i32, stdout: &str, stderr: &str) -> io::Result<CommandOutput> {
        Ok(CommandOutput {
            exit_code: Some(exit_code),
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        })
    }

    #[test]
    fn test_stage_order() {
        let stages: Vec<_> = Stage::all().collect();
        assert_eq!(
            stages,
            vec![
                Stage::LocateRuntime,
                Stage::LocatePackageManager,
                Stage::Install,
                Stage::Verify
            ]
        );
        for pair in stages.windows(2) {
            assert_eq!(pair[0].next(), Some(pair[1]));
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_stage_serde() {
        let json = serde_json::to_string(&Stage::Install).unwrap();
        let stage: Stage = serde_json::from_str(&json).unwrap();
        assert_eq!(stage, Stage::Install);
    }

    #[test]
    fn test_attempt_advances_to_success() {
        let mut attempt = InstallationAttempt::new(&ToolConfig::default());
        for expected in Stage::all() {
            assert_eq!(attempt.stage(), expected);
            if expected != Stage::Verify {
                assert!(attempt.record(Ok(())));
            }
        }

        // The last stage only finishes with a report
        assert!(!attempt.record(Ok(())));
        assert_eq!(attempt.outcome(), &Outcome::Pending);

        assert!(attempt.succeed(report()));
        assert_eq!(attempt.outcome(), &Outcome::Succeeded(report()));
        assert_eq!(attempt.outcome().result(), Some(Ok(report())));
        assert_eq!(attempt.stage(), Stage::Verify);
        assert!(attempt.is_finished());
    }

    #[test]
    fn test_attempt_succeed_only_after_last_stage() {
        let mut attempt = InstallationAttempt::new(&ToolConfig::default());
        assert!(!attempt.succeed(report()));
        assert_eq!(attempt.outcome(), &Outcome::Pending);
        assert_eq!(attempt.outcome().result(), None);
        assert_eq!(attempt.stage(), Stage::LocateRuntime);
    }

    #[test]
    fn test_attempt_failure_is_terminal() {
        let mut attempt = InstallationAttempt::new(&ToolConfig::default());
        assert!(attempt.record(Ok(())));

        let error = InstallError::PackageManagerNotFound {
            label: "pip".to_string(),
            runtime: "python3".to_string(),
            exit_code: Some(1),
            reason: "exited with code 1".to_string(),
            fix: "Install pip".to_string(),
        };
        assert!(attempt.record(Err(&error)));
        assert_eq!(attempt.outcome().result(), Some(Err(error.clone())));
        assert_eq!(attempt.outcome(), &Outcome::Failed(error));
        assert_eq!(attempt.stage(), Stage::LocatePackageManager);

        // No further progress once failed
        assert!(!attempt.record(Ok(())));
        assert!(!attempt.succeed(report()));
        assert_eq!(attempt.stage(), Stage::LocatePackageManager);
        assert!(matches!(attempt.outcome(), Outcome::Failed(_)));
    }

    #[test]
    fn test_attempt_rejects_results_after_success() {
        let mut attempt = InstallationAttempt::new(&ToolConfig::default());
        for _ in Stage::all() {
            attempt.record(Ok(()));
        }
        assert!(attempt.succeed(report()));
        let error = InstallError::VerificationFailed {
            tool: "smart-commits-ai".to_string(),
            exit_code: Some(1),
            reason: "exited with code 1".to_string(),
            fix: "fix".to_string(),
        };
        assert!(!attempt.record(Err(&error)));
        assert!(!attempt.succeed(report()));
        assert_eq!(attempt.outcome(), &Outcome::Succeeded(report()));
    }

    #[test]
    fn test_interrupted_matches_current_stage() {
        let config = ToolConfig::default();
        let mut attempt = InstallationAttempt::new(&config);
        attempt.set_resolved_runtime(runtime());
        attempt.record(Ok(()));

        let err = interrupted(&config, &attempt);
        match &err {
            InstallError::PackageManagerNotFound { runtime, exit_code, .. } => {
                assert_eq!(runtime, "python3");
                assert_eq!(*exit_code, None);
            }
            other => panic!("Unexpected error type: {:?}", other),
        }
        assert!(err.to_string().contains("interrupted"));

        attempt.record(Ok(()));
        assert!(matches!(interrupted(&config, &attempt), InstallError::InstallFailed { .. }));
        attempt.record(Ok(()));
        assert!(matches!(interrupted(&config, &attempt), InstallError::VerificationFailed { .. }));
    }

    #[test]
    fn test_resolved_runtime_only_set_in_first_stage() {
        let mut attempt = InstallationAttempt::new(&ToolConfig::default());
        attempt.set_resolved_runtime(runtime());
        attempt.record(Ok(()));
        attempt.set_resolved_runtime(ResolvedRuntime {
            command: "python".to_string(),
            path: PathBuf::from("/usr/bin/python"),
        });
        assert_eq!(attempt.resolved_runtime(), Some(&runtime()));
    }

    #[test]
    fn test_resolve_runtime_first_hit_wins() {
        let probed = RefCell::new(Vec::new());
        let config = ToolConfig::default();
        let resolved = resolve_runtime(&config, |name| {
            probed.borrow_mut().push(name.to_string());
            Some(Path::new("/usr/bin").join(name))
        })
        .unwrap();

        assert_eq!(resolved.command, "python3");
        assert_eq!(*probed.borrow(), vec!["python3"]);
    }

    #[test]
    fn test_resolve_runtime_falls_through() {
        let config = ToolConfig::default();
        let resolved = resolve_runtime(&config, |name| {
            (name == "python").then(|| PathBuf::from("/usr/bin/python"))
        })
        .unwrap();
        assert_eq!(resolved.command, "python");
        assert_eq!(resolved.path, PathBuf::from("/usr/bin/python"));
    }

    #[test]
    fn test_resolve_runtime_none_found() {
        let config = ToolConfig::default();
        let err = resolve_runtime(&config, |_| None).unwrap_err();
        match err {
            InstallError::RuntimeNotFound { candidates, fix, .. } => {
                assert_eq!(candidates, vec!["python3", "python"]);
                assert!(fix.contains("https://python.org"));
            }
            other => panic!("Unexpected error type: {:?}", other),
        }
    }

    #[test]
    fn test_commands() {
        let config = ToolConfig::default();
        assert_eq!(
            package_manager_probe(&config, &runtime()).to_string(),
            "/usr/bin/python3 -m pip --version"
        );
        assert_eq!(
            install_command(&config, &runtime()).to_string(),
            "/usr/bin/python3 -m pip install smart-commits-ai==1.0.4"
        );
        assert_eq!(
            verification_command(PathBuf::from("smart-commits-ai")).to_string(),
            "smart-commits-ai --version"
        );
    }

    #[test]
    fn test_check_package_manager_success() {
        let config = ToolConfig::default();
        let version = check_package_manager(&config, &runtime(), output(0, "pip 24.0 from /usr/lib\n", "")).unwrap();
        assert_eq!(version, "pip 24.0 from /usr/lib");
    }

    #[test]
    fn test_check_package_manager_nonzero() {
        let config = ToolConfig::default();
        let err = check_package_manager(
            &config,
            &runtime(),
            output(1, "", "/usr/bin/python3: No module named pip\n"),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            InstallError::PackageManagerNotFound {
                exit_code: Some(1),
                ..
            }
        ));
        assert!(err.to_string().contains("No module named pip"));
    }

    #[test]
    fn test_check_package_manager_spawn_error() {
        let config = ToolConfig::default();
        let err = check_package_manager(&config, &runtime(), Err(io::Error::from(io::ErrorKind::NotFound))).unwrap_err();
        assert!(matches!(
            err,
            InstallError::PackageManagerNotFound { exit_code: None, .. }
        ));
        assert!(err.fix_suggestion().contains("ensurepip"));
    }

    #[test]
    fn test_check_package_manager_timeout_fix() {
        let config = ToolConfig::default();
        let err = check_package_manager(&config, &runtime(), Err(timed_out())).unwrap_err();
        assert!(matches!(
            err,
            InstallError::PackageManagerNotFound { exit_code: None, .. }
        ));
        assert!(err.to_string().contains("timed out after 1s"));
        assert!(err.fix_suggestion().contains("SMART_COMMITS_STAGE_TIMEOUT"));
        assert!(!err.fix_suggestion().contains("ensurepip"));
    }

    #[test]
    fn test_check_install() {
        let config = ToolConfig::default();
        assert!(check_install(&config, Ok(Some(0))).is_ok());

        let err = check_install(&config, Ok(Some(1))).unwrap_err();
        match err {
            InstallError::InstallFailed {
                requirement,
                exit_code,
                reason,
                ..
            } => {
                assert_eq!(requirement, "smart-commits-ai==1.0.4");
                assert_eq!(exit_code, Some(1));
                assert_eq!(reason, "exited with code 1");
            }
            other => panic!("Unexpected error type: {:?}", other),
        }

        let err = check_install(&config, Ok(None)).unwrap_err();
        assert!(err.to_string().contains("signal"));
    }

    #[test]
    fn test_check_install_timeout_fix() {
        let config = ToolConfig::default();
        let err = check_install(&config, Err(timed_out())).unwrap_err();
        assert!(err.fix_suggestion().contains("SMART_COMMITS_STAGE_TIMEOUT"));
        assert!(err.to_string().contains("timed out after 1s"));
    }

    #[test]
    fn test_check_tool_location() {
        let config = ToolConfig::default();
        let path = PathBuf::from("/home/user/.local/bin/smart-commits-ai");
        assert_eq!(check_tool_location(&config, Some(path.clone())).unwrap(), path);

        let err = check_tool_location(&config, None).unwrap_err();
        assert!(matches!(err, InstallError::VerificationFailed { .. }));
        assert!(err.fix_suggestion().contains("PATH"));
    }

    #[test]
    fn test_check_tool_location_override_wins() {
        let config = ToolConfig {
            executable_override: Some(PathBuf::from("/opt/tool")),
            ..Default::default()
        };
        assert_eq!(
            check_tool_location(&config, None).unwrap(),
            PathBuf::from("/opt/tool")
        );
    }

    #[test]
    fn test_check_verification() {
        let config = ToolConfig::default();
        let version = check_verification(&config, output(0, "  smart-commits-ai 1.0.4\n", "")).unwrap();
        assert_eq!(version, "smart-commits-ai 1.0.4");

        let err = check_verification(&config, output(2, "", "Traceback")).unwrap_err();
        assert!(matches!(
            err,
            InstallError::VerificationFailed {
                exit_code: Some(2),
                ..
            }
        ));
        assert!(err.fix_suggestion().contains("smart-commits-ai --version"));
    }

    #[test]
    fn test_check_verification_timeout_fix() {
        let config = ToolConfig::default();
        let err = check_verification(&config, Err(timed_out())).unwrap_err();
        assert!(matches!(
            err,
            InstallError::VerificationFailed { exit_code: None, .. }
        ));
        assert!(err.to_string().contains("timed out after 1s"));
        assert!(err.fix_suggestion().contains("SMART_COMMITS_STAGE_TIMEOUT"));
    }
}
