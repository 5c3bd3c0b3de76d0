//! Host binary fed through a pipe: bursts and end of input.

use std::io::{Read, Write};
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

const LINES: usize = 40;

#[test]
fn burst_then_eof_processes_every_line_and_exits() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_homesecurity"))
        .arg(std::env::temp_dir().join("homesecurity-console-test-absent.json"))
        .env("RUST_LOG", "info")
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn host binary");

    {
        let mut stdin = child.stdin.take().expect("stdin piped");
        for i in 0..LINES {
            let line = if i % 2 == 0 { "fast on\n" } else { "fast off\n" };
            stdin.write_all(line.as_bytes()).unwrap();
        }
        // Dropping stdin closes the pipe.
    }

    let mut stdout = child.stdout.take().expect("stdout piped");
    let reader = thread::spawn(move || {
        let mut out = String::new();
        let _ = stdout.read_to_string(&mut out);
        out
    });

    let deadline = Instant::now() + Duration::from_secs(20);
    let status = loop {
        if let Some(status) = child.try_wait().unwrap() {
            break status;
        }
        if Instant::now() > deadline {
            let _ = child.kill();
            panic!("host binary did not exit after end of input");
        }
        thread::sleep(Duration::from_millis(20));
    };
    assert!(status.success());

    let out = reader.join().unwrap();
    let changes = out.matches("FAST | fast_cyclic_remind=").count();
    assert_eq!(changes, LINES, "every fast on/off line must reach the coordinator");
}
