//! Installation execution.
//!
//! [`Installer`] drives an [`InstallationAttempt`] through the pipeline,
//! running one child process per stage through a [`Host`] and reporting
//! progress via a callback.

use super::stage::{
    check_install, check_package_manager, check_tool_location, check_verification,
    install_command, interrupted, package_manager_probe, resolve_runtime, verification_command,
};
use super::{InstallError, InstallProgress, InstallationAttempt, Outcome, ResolvedRuntime, Stage};
use crate::config::{InstallOptions, ToolConfig};
use crate::detection::parse_version;
use crate::host::{Host, SystemHost};
use semver::Version;
use std::future::Future;
use std::io;
use std::time::Duration;

/// What a successful installation found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    /// Package that was installed.
    pub tool_name: String,
    /// Pinned version that was requested.
    pub version: String,
    /// Runtime used to reach the package manager.
    pub runtime: ResolvedRuntime,
    /// The package manager's own version line.
    pub package_manager_version: String,
    /// The tool's version output, trimmed of surrounding whitespace.
    pub verification: String,
    /// Semantic version parsed from `verification`, if present.
    pub installed_version: Option<Version>,
}

/// Installs and verifies the configured tool.
///
/// # Example
///
/// ```rust,no_run
/// use smart_commits_shim::{InstallOptions, Installer, ToolConfig};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let installer = Installer::new(ToolConfig::default(), InstallOptions::default());
///     match installer.install(|progress| println!("{}", progress)).await {
///         Ok(report) => println!("Installed: {}", report.verification),
///         Err(e) => println!("Failed: {}. Fix: {}", e, e.fix_suggestion()),
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Installer<H = SystemHost> {
    config: ToolConfig,
    options: InstallOptions,
    host: H,
}

impl Installer<SystemHost> {
    /// Installer backed by the real system.
    pub fn new(config: ToolConfig, options: InstallOptions) -> Self {
        Self::with_host(config, options, SystemHost)
    }
}

impl<H: Host> Installer<H> {
    /// Installer backed by a custom [`Host`].
    pub fn with_host(config: ToolConfig, options: InstallOptions, host: H) -> Self {
        Self {
            config,
            options,
            host,
        }
    }

    /// The configuration this installer was built with.
    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    /// The host processes are run through.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Run the installation pipeline once.
    ///
    /// Stages run strictly in order; the first failing stage ends the run
    /// and no later stage executes.
    ///
    /// # Returns
    ///
    /// - `Ok(InstallReport)` if every stage succeeded
    /// - `Err(InstallError)` naming the stage that failed, with a fix
    ///   suggestion
    pub async fn install<F>(&self, on_progress: F) -> Result<InstallReport, InstallError>
    where
        F: Fn(InstallProgress),
    {
        let mut attempt = InstallationAttempt::new(&self.config);
        self.run(&mut attempt, on_progress).await
    }

    /// Run the pipeline against a caller-owned attempt.
    ///
    /// The attempt is left in its final state so callers can inspect the last
    /// stage reached. Only a fresh attempt from [`InstallationAttempt::new`]
    /// runs any stage:
    ///
    /// - a finished attempt returns its recorded result and nothing is run
    ///   again
    /// - an attempt that was left mid-pipeline fails at its current stage
    pub async fn run<F>(&self, attempt: &mut InstallationAttempt, on_progress: F) -> Result<InstallReport, InstallError>
    where
        F: Fn(InstallProgress),
    {
        let config = &self.config;
        if let Some(result) = attempt.outcome().result() {
            tracing::warn!(stage = ?attempt.stage(), "attempt already finished, not running it again");
            return result;
        }
        if attempt.stage() != Stage::LocateRuntime {
            tracing::warn!(stage = ?attempt.stage(), "attempt was interrupted, not resuming it");
            let error = interrupted(config, attempt);
            return step(attempt, Err(error));
        }

        tracing::debug!(
            tool = attempt.tool_name(),
            version = attempt.version(),
            "installation attempt started"
        );
        on_progress(InstallProgress::Started {
            tool: config.tool_name.clone(),
            version: config.version.clone(),
        });

        // Stage 0: runtime
        on_progress(InstallProgress::LocatingRuntime {
            label: config.runtime.label.clone(),
        });
        let resolved = resolve_runtime(config, |name| {
            let found = self.host.locate(name);
            tracing::debug!(candidate = name, found = ?found, "probed runtime");
            found
        });
        if let Ok(runtime) = &resolved {
            attempt.set_resolved_runtime(runtime.clone());
        }
        let runtime = step(attempt, resolved)?;
        on_progress(InstallProgress::RuntimeFound {
            command: runtime.command.clone(),
            path: runtime.path.clone(),
        });

        // Stage 1: package manager
        on_progress(InstallProgress::CheckingPackageManager {
            label: config.package_manager.label.clone(),
        });
        let probe = package_manager_probe(config, &runtime);
        let probed = self.limited(self.host.capture(&probe)).await;
        let package_manager_version = step(attempt, check_package_manager(config, &runtime, probed))?;
        on_progress(InstallProgress::PackageManagerFound {
            label: config.package_manager.label.clone(),
            version: package_manager_version.clone(),
        });

        // Stage 2: install
        let requirement = config.requirement();
        on_progress(InstallProgress::Installing {
            requirement: requirement.clone(),
        });
        let install = install_command(config, &runtime);
        let installed = self.limited(self.host.run_inherited(&install)).await;
        step(attempt, check_install(config, installed))?;
        on_progress(InstallProgress::Installed { requirement });

        // Stage 3: verify
        let verified = match check_tool_location(config, self.host.locate(&config.executable)) {
            Ok(path) => {
                on_progress(InstallProgress::Verifying { path: path.clone() });
                let cmd = verification_command(path);
                let output = self.limited(self.host.capture(&cmd)).await;
                check_verification(config, output)
            }
            Err(e) => Err(e),
        };
        let verification = match verified {
            Ok(verification) => verification,
            Err(e) => return step(attempt, Err(e)),
        };

        let installed_version = parse_version(&verification);
        match &installed_version {
            Some(found) if found.to_string() != config.version => {
                tracing::warn!(
                    expected = %config.version,
                    found = %found,
                    "installed version differs from the pinned version"
                );
            }
            None => tracing::debug!(output = %verification, "no version in verification output"),
            _ => {}
        }

        let report = InstallReport {
            tool_name: config.tool_name.clone(),
            version: config.version.clone(),
            runtime,
            package_manager_version,
            verification,
            installed_version,
        };
        let recorded = attempt.succeed(report.clone());
        debug_assert!(recorded, "success rejected by attempt at {:?}", attempt.stage());

        on_progress(InstallProgress::Completed {
            verification: report.verification.clone(),
        });
        Ok(report)
    }

    /// Apply the configured stage timeout to a child-process future.
    async fn limited<T, Fut>(&self, fut: Fut) -> io::Result<T>
    where
        Fut: Future<Output = io::Result<T>>,
    {
        match self.options.stage_timeout {
            Some(limit) => with_timeout(limit, fut).await,
            None => fut.await,
        }
    }
}

async fn with_timeout<T, Fut>(limit: Duration, fut: Fut) -> io::Result<T>
where
    Fut: Future<Output = io::Result<T>>,
{
    tokio::time::timeout(limit, fut).await.unwrap_or_else(|_| {
        Err(io::Error::new(
            io::ErrorKind::TimedOut,
            format!("timed out after {:?}", limit),
        ))
    })
}

/// Record a stage result on the attempt and pass it through.
///
/// `run` only drives fresh attempts, so a rejected result means the attempt
/// was finished behind its back; its recorded failure wins.
fn step<T>(attempt: &mut InstallationAttempt, result: Result<T, InstallError>) -> Result<T, InstallError> {
    let recorded = attempt.record(result.as_ref().map(|_| ()));
    debug_assert!(recorded, "stage result rejected by attempt at {:?}", attempt.stage());
    match attempt.outcome() {
        Outcome::Failed(error) if !recorded => Err(error.clone()),
        _ => result,
    }
}
