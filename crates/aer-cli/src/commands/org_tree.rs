use aer_config::OrgTreeConfig;
use aer_core::enums::{Severity, TreeFilter};
use aer_ui::{ExpandMode, OrgTreeView, TreeOptions};

use crate::cli::OrgTreeArgs;
use crate::context::AppContext;
use crate::input::load_rows;
use crate::output::output;

/// Handle `aer org-tree <FILE>`.
pub fn handle(args: &OrgTreeArgs, ctx: &mut AppContext) -> anyhow::Result<()> {
    ctx.log.update_status(
        &format!("Loading org chart {}", args.file.display()),
        Severity::Info,
    );
    let rows = load_rows(&args.file)?;

    let options = tree_options(args, &ctx.config.org_tree);
    let mut tree = match OrgTreeView::from_rows(&rows, &options) {
        Ok(tree) => tree,
        Err(error) => return ctx.fail_load("org tree", &error),
    };

    let candidates = tree.head_candidates().len();
    ctx.log.log_detail(&format!(
        "loaded {} people, {} department-head candidates",
        tree.len(),
        candidates
    ));
    if !tree.is_empty() && candidates == 0 {
        ctx.log.update_status(
            "No department-head candidates match the configured keywords",
            Severity::Warning,
        );
    }

    let total = args.select.len() as u64 + u64::from(args.select_heads);
    let mut done = 0_u64;
    let label = "Selecting department heads";
    ctx.log.show_progress(done, total, label);

    for id in &args.select {
        tree.set_selected(id, true)?;
        done += 1;
        ctx.log.show_progress(done, total, label);
    }
    if args.select_heads {
        let added = tree.select_visible_heads();
        ctx.log.log_detail(&format!("selected {added} visible head candidates"));
        done += 1;
        ctx.log.show_progress(done, total, label);
    }

    ctx.log.update_status(
        &format!("Selected {} department heads", tree.selected_count()),
        Severity::Success,
    );

    output(&tree.render(), &tree.to_response(), ctx.format)
}

/// Config defaults with command-line flags layered on top.
fn tree_options(args: &OrgTreeArgs, config: &OrgTreeConfig) -> TreeOptions {
    let mut options = TreeOptions::from(config);
    if args.heads_only {
        options.filter = TreeFilter::HeadsOnly;
    }
    if args.collapsed {
        options.expand = ExpandMode::Collapsed;
    }
    if args.allow_forest {
        options.allow_forest = true;
    }
    options
}
