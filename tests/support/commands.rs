//! Command helper methods for Test.

use super::{Test, DEAD_ENDPOINT};
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a secretenv command with a sealed-off AWS environment.
    ///
    /// Credentials are dummies, the endpoint is unreachable and retries
    /// are disabled, so any vault call fails quickly.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("secretenv").expect("failed to find secretenv binary");
        cmd.env("HOME", self.home.path());
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("NO_COLOR", "1");
        cmd.env("AWS_ACCESS_KEY_ID", "test");
        cmd.env("AWS_SECRET_ACCESS_KEY", "test");
        cmd.env("AWS_REGION", "us-east-1");
        cmd.env("AWS_MAX_ATTEMPTS", "1");
        cmd.env("AWS_EC2_METADATA_DISABLED", "true");
        cmd.env("SECRETENV_AWS_ENDPOINT", DEAD_ENDPOINT);
        cmd.env_remove("AWS_PROFILE");
        cmd.env_remove("SECRETENV_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run `secretenv aws secret <args>`.
    pub fn secret(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(["aws", "secret"])
            .args(args)
            .output()
            .expect("failed to run secretenv aws secret")
    }

    /// Run `secretenv aws -s <name> -- <program>`.
    pub fn inject(&self, name: &str, program: &[&str]) -> Output {
        self.cmd()
            .args(["aws", "-s", name, "--"])
            .args(program)
            .output()
            .expect("failed to run secretenv aws")
    }
}
