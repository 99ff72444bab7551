use tasty_lib::dump::{DumpOptions, dump_tokens};
use tasty_lib::state;
use tasty_lib::value::{self, ValueContext};

pub enum TokensInput {
    Value(String),
    Key(String),
}

pub struct TokensArgs {
    pub input: TokensInput,
    pub units: Vec<String>,
    pub presets: Vec<String>,
    pub aliases: Vec<String>,
    pub trivia: bool,
    pub spans: bool,
}

pub fn run(args: TokensArgs) {
    print!("{}", render(&args));
}

pub fn render(args: &TokensArgs) -> String {
    let options = DumpOptions {
        trivia: args.trivia,
        spans: args.spans,
    };
    let tokens = match &args.input {
        TokensInput::Value(text) => {
            let mut ctx = ValueContext::new();
            if !args.units.is_empty() {
                ctx = ctx.with_units(&args.units);
            }
            if !args.presets.is_empty() {
                ctx = ctx.with_presets(&args.presets);
            }
            value::tokenize(text, ctx)
        }
        TokensInput::Key(text) => {
            let aliases: Vec<String> = args
                .aliases
                .iter()
                .map(|a| if a.starts_with('@') { a.clone() } else { format!("@{a}") })
                .collect();
            state::tokenize(text, &aliases)
        }
    };
    dump_tokens(&tokens, options)
}
