use std::{
    path::Path,
    process::{Child, Command, ExitStatus, Output},
    thread,
    time::{Duration, Instant},
};

/// Config path that never exists, so the binary falls back to defaults.
pub const NO_CONFIG: &str = "/definitely/not/here/config.toml";

/// A `phish-check` command with no inherited `PORT` and an explicit config file.
pub fn phish_check(config: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_phish-check"));
    cmd.arg("--config").arg(config).env_remove("PORT");
    cmd
}

/// Run the binary to completion. Only for invocations expected to exit on their own.
pub fn run_to_exit(mut cmd: Command) -> Output {
    cmd.output().expect("phish-check should start")
}

/// A server bound to an ephemeral loopback port, killed when dropped.
pub struct ServerProcess {
    child: Child,
}

impl ServerProcess {
    pub fn start(config: &Path) -> std::io::Result<Self> {
        let mut cmd = phish_check(config);
        cmd.args(["--host", "127.0.0.1", "--port", "0"])
            .env("RUST_LOG", "info");
        Ok(Self { child: cmd.spawn()? })
    }

    /// Poll for an exit for up to `max`. `None` means the server is still serving.
    pub fn exit_within(&mut self, max: Duration) -> Option<ExitStatus> {
        let deadline = Instant::now() + max;
        while Instant::now() < deadline {
            if let Ok(Some(status)) = self.child.try_wait() {
                return Some(status);
            }
            thread::sleep(Duration::from_millis(25));
        }
        self.child.try_wait().ok().flatten()
    }
}

impl Drop for ServerProcess {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
