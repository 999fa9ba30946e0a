use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(name = "graphql-flatten", version)]
pub(crate) struct Cli {
    #[arg(
        help="Path to the GraphQL query document to flatten (UTF-8 text).",
        name="INPUT_FILE",
    )]
    pub input_file_path: PathBuf,

    #[arg(
        help="Path the flattened query is written to (overwritten if it \
             already exists).",
        name="OUTPUT_FILE",
    )]
    pub output_file_path: PathBuf,

    #[arg(
        help="Also delete all occurrences of `__typename` from the \
             flattened query. Note that `__typename` is required by some \
             GraphQL clients (e.g. Apollo), so this is off by default.",
        long="delete_typename",
        short='d',
    )]
    pub delete_typename: bool,

    #[arg(
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
