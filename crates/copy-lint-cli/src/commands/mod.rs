//! Subcommand implementations.

pub mod check;
pub mod init;
pub mod list_rules;
pub mod output;

/// Renders a library error through miette so its code and help survive.
pub(crate) fn diagnostic<E>(err: E) -> anyhow::Error
where
    E: miette::Diagnostic + Send + Sync + 'static,
{
    anyhow::anyhow!("{:?}", miette::Report::new(err))
}
