//! Wire fixtures, modelled on real compiler driver output.

use taskwire_core::{Completion, Launch, Message, MessageKind, OutputRef};

/// Frame a body as `<len>\n<body>`.
pub fn record(body: &str) -> Vec<u8> {
    format!("{}\n{}", body.len(), body).into_bytes()
}

pub fn began(name: &str, inputs: &[&str], outputs: &[(&str, &str)]) -> Message {
    Message::new(name, MessageKind::Began(launch(inputs, outputs)))
}

pub fn skipped(name: &str, inputs: &[&str], outputs: &[(&str, &str)]) -> Message {
    Message::new(name, MessageKind::Skipped(launch(inputs, outputs)))
}

pub fn finished(name: &str, output: Option<&str>) -> Message {
    Message::new(name, MessageKind::Finished(Completion { output: output.map(String::from) }))
}

pub fn signalled(name: &str, output: Option<&str>) -> Message {
    Message::new(name, MessageKind::Signalled(Completion { output: output.map(String::from) }))
}

fn launch(inputs: &[&str], outputs: &[(&str, &str)]) -> Launch {
    Launch {
        inputs: inputs.iter().map(|s| s.to_string()).collect(),
        outputs: outputs.iter().map(|(t, p)| OutputRef::new(*t, *p)).collect(),
    }
}

const COMPILE_BEGAN: &str = r#"{
  "kind": "began",
  "name": "compile",
  "inputs": [
    "test.swift"
  ],
  "outputs": [
    {
      "type": "object",
      "path": "/tmp/T/test-77d991.o"
    }
  ],
  "pid": 22698
}"#;

const COMPILE_FINISHED: &str = r#"{
  "kind": "finished",
  "name": "compile",
  "pid": 22698,
  "exit-status": 1,
  "output": "error: it failed :-("
}"#;

const COMPILE_SKIPPED: &str = r#"{
  "kind": "skipped",
  "name": "compile",
  "inputs": [
    "test2.swift"
  ],
  "outputs": [
    {
      "type": "object",
      "path": "/tmp/T/test2-77d991.o"
    }
  ],
  "pid": 58776
}"#;

const LINK_BEGAN: &str = r#"{
  "kind": "began",
  "name": "link",
  "inputs": [
    "/tmp/T/test-77d991.o"
  ],
  "outputs": [
    {
      "type": "image",
      "path": "test"
    }
  ],
  "pid": 22699
}"#;

const LINK_SIGNALLED: &str = r#"{
  "kind": "signalled",
  "name": "link",
  "pid": 22699,
  "error-message": "Segmentation fault: 11",
  "signal": 4
}"#;

/// A full compile/link session with separator lines between records,
/// and the messages it must decode to.
pub fn session() -> (Vec<u8>, Vec<Message>) {
    let mut bytes = Vec::new();
    for (i, body) in [COMPILE_BEGAN, COMPILE_FINISHED, COMPILE_SKIPPED, LINK_BEGAN, LINK_SIGNALLED]
        .iter()
        .enumerate()
    {
        bytes.extend(record(body));
        bytes.push(b'\n');
        if i % 2 == 1 {
            bytes.push(b'\n');
        }
    }

    let messages = vec![
        began("compile", &["test.swift"], &[("object", "/tmp/T/test-77d991.o")]),
        finished("compile", Some("error: it failed :-(")),
        skipped("compile", &["test2.swift"], &[("object", "/tmp/T/test2-77d991.o")]),
        began("link", &["/tmp/T/test-77d991.o"], &[("image", "test")]),
        signalled("link", None),
    ];

    (bytes, messages)
}
