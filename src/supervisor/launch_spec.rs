//! Command line for the engine base.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// The executable to start and the arguments to start it with.
///
/// `arguments` is always `-game "<mod dir>" ` followed by the forwarded
/// tokens joined with single spaces. With nothing forwarded the trailing
/// space stays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec {
    /// Engine base executable.
    pub executable: PathBuf,
    /// Argument string, as shown in logs.
    pub arguments: String,
    mod_directory: PathBuf,
    forwarded: Vec<String>,
}

impl LaunchSpec {
    /// Build the launch spec for running `mod_directory` on `executable`.
    pub fn new(executable: &Path, mod_directory: &Path, forwarded: &[String]) -> Self {
        let arguments = format!(
            "-game \"{}\" {}",
            mod_directory.display(),
            forwarded.join(" ")
        );

        Self {
            executable: executable.to_path_buf(),
            arguments,
            mod_directory: mod_directory.to_path_buf(),
            forwarded: forwarded.to_vec(),
        }
    }

    /// Arguments as the child sees them, one token each.
    pub fn argv(&self) -> Vec<OsString> {
        let mut argv = Vec::with_capacity(self.forwarded.len() + 2);
        argv.push(OsString::from("-game"));
        argv.push(self.mod_directory.clone().into_os_string());
        argv.extend(self.forwarded.iter().map(OsString::from));
        argv
    }

    /// A command that starts the executable directly with stdout piped.
    ///
    /// Stdin and stderr are inherited from the launcher. On Unix the child
    /// ignores `SIGPIPE`, so it survives writing to stdout after the launcher
    /// has exited and closed the read end.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.executable);
        cmd.args(self.argv());
        cmd.stdin(Stdio::inherit());
        cmd.stderr(Stdio::inherit());
        cmd.stdout(Stdio::piped());
        #[cfg(unix)]
        ignore_sigpipe(&mut cmd);
        cmd
    }
}

#[cfg(unix)]
fn ignore_sigpipe(cmd: &mut Command) {
    use std::os::unix::process::CommandExt;

    // SAFETY: signal(2) is async-signal-safe, and the closure touches no
    // memory shared with the parent.
    unsafe {
        cmd.pre_exec(|| {
            if libc::signal(libc::SIGPIPE, libc::SIG_IGN) == libc::SIG_ERR {
                return Err(std::io::Error::last_os_error());
            }
            Ok(())
        });
    }
}
