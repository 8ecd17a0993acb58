use crate::config::Config;
use crate::{CommandPipe, Manager, Renderer};
use std::time::Duration;
use tokio::time::{self, Instant, MissedTickBehavior};

/// How often visible toasts are checked for expiry.
const TOAST_TICK: Duration = Duration::from_millis(250);

impl<C: Config, R: Renderer> Manager<C, R> {
    /// Run until a `Shutdown` command arrives or the command pipe closes.
    /// A `Reboot` keeps the loop running and boots again after the
    /// shutdown delay.
    pub async fn event_loop(&mut self, mut command_pipe: CommandPipe) {
        let boot = time::sleep(self.config.boot_delay());
        tokio::pin!(boot);
        let mut booted = false;

        let restart = time::sleep(self.config.shutdown_delay());
        tokio::pin!(restart);
        let mut restarting = false;

        let mut toast_tick = time::interval(TOAST_TICK);
        toast_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        self.load_desktop();

        //main event loop
        loop {
            self.flush_actions();
            if self.is_shut_down() {
                break;
            }
            if self.state.rebooting && !restarting {
                restarting = true;
                restart.as_mut().reset(Instant::now() + self.config.shutdown_delay());
            }

            tokio::select! {
                () = &mut boot, if !booted => {
                    booted = true;
                    self.state.complete_boot();
                }
                () = &mut restart, if restarting => {
                    restarting = false;
                    if self.state.finish_reboot() {
                        booted = false;
                        boot.as_mut().reset(Instant::now() + self.config.boot_delay());
                    }
                }
                _ = toast_tick.tick() => {
                    self.state.expire_toasts(chrono::Utc::now());
                }
                cmd = command_pipe.read_command() => {
                    if let Some(cmd) = cmd {
                        self.command_handler(&cmd);
                    } else {
                        tracing::info!("Command pipe closed");
                        self.state.shutdown();
                    }
                }
            }
        }
    }
}
