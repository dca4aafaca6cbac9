use crate::cli::ProgressAction;
use crate::context::CliContext;
use crate::output;
use smartbook_domain::ProgressStore;

pub fn handle(ctx: &CliContext, action: ProgressAction) -> anyhow::Result<()> {
    match action {
        ProgressAction::Show { book_id } => match ctx.progress.load(&book_id)? {
            Some(progress) => output::output_success(progress),
            None => output::output_error(&format!("No progress saved for {}", book_id)),
        },
        ProgressAction::List => output::output_list(ctx.progress.list()?),
        ProgressAction::Clear { book_id } => {
            let removed = ctx.progress.remove(&book_id)?;
            output::output_success(serde_json::json!({ "book_id": book_id, "removed": removed }))
        }
    }
}
