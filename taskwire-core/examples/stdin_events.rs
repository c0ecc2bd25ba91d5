use taskwire_core::{Delegate, ErrorKind, Message, Parser};

struct Print;

impl Delegate for Print {
    fn on_message(&mut self, message: Message) {
        eprintln!("MESSAGE: {:?}", message);
    }

    fn on_failure(&mut self, error: ErrorKind) {
        eprintln!("FAILED: {}", error);
    }
}

fn main() {
    let mut parser = Parser::new(Print);
    parser.read_from(std::io::stdin().lock()).unwrap();
}
