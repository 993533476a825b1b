//! Child process plumbing: piped spawning, output capture and timed waits.

use std::io::{self, Read};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Output and status collected from a finished (or killed) child.
#[derive(Debug)]
pub(super) struct Captured {
    pub output: String,
    pub exit_code: Option<i32>,
    pub timed_out: bool,
}

/// Spawns `command` with stdin closed and both output streams piped.
pub(super) fn spawn_piped(command: &mut Command) -> io::Result<Child> {
    command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
}

/// Waits for `child` and returns stdout followed by stderr.
///
/// Both pipes are drained on their own threads so a chatty checker cannot
/// block on a full pipe while we wait. When `timeout` expires the child is
/// killed and whatever it printed is discarded.
pub(super) fn collect(mut child: Child, timeout: Option<Duration>) -> io::Result<Captured> {
    let stdout = child.stdout.take().map(spawn_reader);
    let stderr = child.stderr.take().map(spawn_reader);

    let status = match timeout {
        None => Some(child.wait()?),
        Some(limit) => wait_with_timeout(&mut child, limit)?,
    };

    // Readers of a killed child are left to finish on their own; a grandchild
    // may still hold the pipes open.
    let Some(status) = status else {
        return Ok(Captured {
            output: String::new(),
            exit_code: None,
            timed_out: true,
        });
    };

    let mut bytes = join_reader(stdout);
    bytes.extend(join_reader(stderr));
    Ok(Captured {
        output: String::from_utf8_lossy(&bytes).into_owned(),
        exit_code: status.code(),
        timed_out: false,
    })
}

fn spawn_reader<R: Read + Send + 'static>(mut pipe: R) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        // A read error mid-stream keeps what was read so far.
        let _ = pipe.read_to_end(&mut buf);
        buf
    })
}

fn join_reader(handle: Option<JoinHandle<Vec<u8>>>) -> Vec<u8> {
    handle
        .and_then(|h| h.join().ok())
        .unwrap_or_default()
}

/// Polls `child` until it exits or `timeout` elapses.
///
/// Returns `None` if the child was killed.
fn wait_with_timeout(child: &mut Child, timeout: Duration) -> io::Result<Option<ExitStatus>> {
    let start = Instant::now();

    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if start.elapsed() >= timeout {
            kill_process(child);
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// Kill a process and reap it.
fn kill_process(child: &mut Child) {
    // On Unix this is SIGKILL; on Windows it is TerminateProcess.
    let _ = child.kill();
    let _ = child.wait();
}
