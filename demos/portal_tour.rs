//! Walks every portal page's query shape against the builtin data set.
//!
//! Run with: `cargo run --example portal_tour`
//! Set `RUST_LOG=portal=debug` to watch the engine recompute per state change.

use anyhow::Result;
use portal::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("portal=info")),
        )
        .init();

    let store = RecordStore::builtin()?;
    let now: DateTime<Utc> = "2025-06-15T12:00:00Z".parse()?;

    tickets_page(&store, now)?;
    projects_page(&store)?;
    documents_page(&store)?;
    contracts_page(&store)?;
    assets_page(&store)?;

    Ok(())
}

/// Tickets: search box + status tabs + sortable columns
fn tickets_page(store: &RecordStore, now: DateTime<Utc>) -> Result<()> {
    let state = QueryState::new()
        .with_filter("status", FilterValue::All)
        .sorted_by(SortSpec::desc("updated_at"));
    let page = run_query(store.tickets(), &state)?;

    println!("== Tickets ==");
    if let Some(status_counts) = page.counts.get("status") {
        let tabs: Vec<String> = status_counts
            .iter()
            .map(|(value, count)| format!("{value} ({count})"))
            .collect();
        println!("tabs: {}", tabs.join("  "));
    }
    for ticket in &page.rows {
        let assignee = store
            .user_by_id(&ticket.assignee_id)
            .display_or(UNASSIGNED, |user| user.name.as_str());
        println!(
            "  {}  {:<12} {:<9} {:<18} {:<46} {}",
            ticket.id,
            ticket.status.label(),
            ticket.priority.label(),
            assignee,
            ticket.title,
            format_relative_date(ticket.updated_at, now),
        );
    }

    // Typing into the search box is just a new state
    let searched = run_query(
        store.tickets(),
        &QueryState::new().with_term("export"),
    )?;
    println!(
        "search 'export': {} of {} tickets",
        searched.rows.len(),
        store.tickets().len()
    );

    if let Some(first) = page.rows.first() {
        println!("row as JSON: {}", serde_json::to_string_pretty(first)?);
    }
    Ok(())
}

/// Projects: status tabs + budget cards
fn projects_page(store: &RecordStore) -> Result<()> {
    let state = QueryState::new().with_filter("status", FilterValue::from_tab("active"));
    let page = run_query(store.projects(), &state)?;

    println!("\n== Projects (active) ==");
    for project in &page.rows {
        let manager = store
            .user_by_id(&project.manager_id)
            .display_or(UNASSIGNED, |user| user.name.as_str());
        println!(
            "  {:<28} {:>3}% done  {} / {} ({}% utilized)  manager: {}",
            project.name,
            project.progress,
            format_currency(project.spent),
            format_currency(project.budget),
            project.budget_percent(),
            manager,
        );
    }
    Ok(())
}

/// Documents: search box + type dropdown
fn documents_page(store: &RecordStore) -> Result<()> {
    let state = QueryState::new()
        .with_filter("type", FilterValue::from_tab("invoice"))
        .sorted_by(SortSpec::desc("uploaded_at"));
    let page = run_query(store.documents(), &state)?;

    println!("\n== Documents (invoices) ==");
    for document in &page.rows {
        let uploader = store
            .user_by_id(&document.uploaded_by_id)
            .display_or(UNKNOWN, |user| user.name.as_str());
        let project = store
            .project_by_id(&document.project_id)
            .display_or(DASH, |project| project.name.as_str());
        println!(
            "  {:<30} {:<10} {:>9}  {:<24} {}",
            document.name,
            document.doc_type.label(),
            format_file_size(document.size),
            project,
            uploader,
        );
    }
    Ok(())
}

/// Contracts: status tabs + total-value summary card
fn contracts_page(store: &RecordStore) -> Result<()> {
    let state = QueryState::new().with_filter("status", FilterValue::All);
    let page = run_query(store.contracts(), &state)?;

    println!("\n== Contracts ==");
    println!(
        "total value ({} contracts): {}",
        page.rows.len(),
        format_currency(contract_value_total(&page.rows)),
    );
    for contract in &page.rows {
        println!(
            "  {:<36} {:<11} {:>9}  {} — {}",
            contract.title,
            contract.status.label(),
            format_currency(contract.value),
            format_date(contract.start_date),
            format_date(contract.end_date),
        );
    }
    Ok(())
}

/// Assets: category tabs + search box
fn assets_page(store: &RecordStore) -> Result<()> {
    let state = QueryState::new()
        .with_filter("category", FilterValue::from_tab("server"))
        .sorted_by(SortSpec::desc("value"));
    let page = run_query(store.assets(), &state)?;

    println!("\n== Assets (servers, by value) ==");
    for asset in &page.rows {
        println!(
            "  {:<24} {:<12} {:<12} {:>8}  warranty to {}",
            asset.name,
            asset.category.label(),
            asset.status.label(),
            format_currency(asset.value),
            format_date(asset.warranty_end),
        );
    }

    // A search with no hits renders the placeholder row, not an error
    let empty = run_query(
        store.assets(),
        &QueryState::new().with_term("zzz-nonexistent"),
    )?;
    if empty.is_empty() {
        println!("  search 'zzz-nonexistent': {NO_RECORDS}");
    }
    Ok(())
}
