use std::fs;
use std::io;

use vela::lexing::Token;

const SAMPLES: &[&str] = &[
    "PROG ledger: VAR total = 10.5; FUNC add(a, b) { RETURN a + b; } END",
    "PROG lottery: IF pick IS IN drawn AND pick NOT IN claimed THEN OUTPUT \"winner\"",
    "PROG odd: VAR x = 7pop; OUTPUT \"unterminated",
];

fn main() -> io::Result<()> {
    env_logger::init();

    let mut output = String::new();
    for &sample in SAMPLES {
        let source = vela::source::text(sample);
        let tokens = vela::run(source);

        output.push_str(&format!("Source: {}\n", sample));
        output.push_str(&token_table(&tokens));
        output.push('\n');
    }

    print!("{}", output);
    fs::write("tokens.txt", &output)?;
    println!("Output has been saved to 'tokens.txt'");
    Ok(())
}

fn token_table(tokens: &[Token]) -> String {
    let mut table = String::from("TokenType        Lexeme\n");
    table.push_str("---------------  ------\n");
    for token in tokens {
        table.push_str(&format!("{:<15}  {}\n", token.kind.name(), token.lexeme()));
    }
    table
}
