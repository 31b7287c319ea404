use aer_core::enums::Severity;
use aer_ui::{PanelOptions, ReviewSelectionPanel};

use crate::cli::ReviewArgs;
use crate::context::AppContext;
use crate::input::load_rows;
use crate::output::output;

/// Handle `aer review <FILE>`.
pub fn handle(args: &ReviewArgs, ctx: &mut AppContext) -> anyhow::Result<()> {
    ctx.log.update_status(
        &format!("Loading review table {}", args.file.display()),
        Severity::Info,
    );
    let rows = load_rows(&args.file)?;

    let mut panel = match ReviewSelectionPanel::from_rows(&rows, PanelOptions::from(&ctx.config.review)) {
        Ok(panel) => panel,
        Err(error) => return ctx.fail_load("review panel", &error),
    };
    ctx.log.log_detail(&format!(
        "loaded {} records in {} groups",
        panel.len(),
        panel.groups().len()
    ));

    apply_actions(args, &mut panel, ctx)?;

    let decision = panel.submit();
    ctx.log.update_status(
        &format!(
            "{} approved, {} skipped",
            decision.approved.len(),
            decision.skipped.len()
        ),
        Severity::Success,
    );

    output(&panel.render(), &panel.to_response(), ctx.format)
}

fn apply_actions(
    args: &ReviewArgs,
    panel: &mut ReviewSelectionPanel,
    ctx: &mut AppContext,
) -> anyhow::Result<()> {
    let total = args.action_count() as u64;
    let mut done = 0_u64;
    let label = "Applying selections";

    ctx.log.show_progress(done, total, label);

    if args.select_all {
        panel.select_all();
        done += 1;
        ctx.log.show_progress(done, total, label);
    }

    for category in &args.select_groups {
        let matched = panel.select_group(*category);
        if matched == 0 {
            ctx.log.update_status(
                &format!("No records in group '{}'", category.title()),
                Severity::Warning,
            );
        }
        done += 1;
        ctx.log.show_progress(done, total, label);
    }

    for id in &args.select {
        panel.set_selected(id, true)?;
        done += 1;
        ctx.log.show_progress(done, total, label);
    }

    for id in &args.deselect {
        panel.set_selected(id, false)?;
        done += 1;
        ctx.log.show_progress(done, total, label);
    }

    Ok(())
}
