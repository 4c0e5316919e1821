use falcogen_codegen::derive_identifier;

use crate::cli::IdentArgs;

pub(crate) fn handle_ident(args: &IdentArgs) -> String {
    derive_identifier(&args.path, &args.prefix)
}
