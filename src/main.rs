use std::io::{self, Read};

use lexer::scanner::scanner::scan;

fn main() {
    let mut source = String::new();
    io::stdin()
        .read_to_string(&mut source)
        .expect("Failed to read input!");

    let state = scan(&source);

    println!("{}", state.render());
}
