use crate::render::{print_cards, print_table, TableRow};
use anyhow::{anyhow, bail, Context, Result};
use chrono::{Local, NaiveDate};
use counselflow_core::aggregate::{
    ComplianceSummary, ContractSummary, DisputeSummary, EntitySummary, MatterSummary,
    PolicySummary, RiskSummary, SummaryCard, TaskSummary, VendorSummary,
};
use counselflow_core::db::{open_db, open_db_in_memory};
use counselflow_core::routes::{ALIASES, ROUTES};
use counselflow_core::{
    apply_list_view, facet_values, parse_query, resolve_route, seed_compliance_demo, AppContext,
    ComplianceMonitor, ComplianceView, Domain, Listable, Page, RouteResolution,
    SqliteComplianceSource,
};
use log::info;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Plain
        }
    }
}

pub struct ListArgs {
    pub search: String,
    pub filters: Vec<String>,
    pub sort: Option<String>,
    pub unsorted: bool,
}

pub fn list(context: &AppContext, route: &str, args: &ListArgs, format: OutputFormat) -> Result<()> {
    let domain = route_domain(route)?;
    let data = context.data();
    match domain {
        Domain::Contracts => list_records(&data.contracts, args, format),
        Domain::Matters => list_records(&data.matters, args, format),
        Domain::Entities => list_records(&data.entities, args, format),
        Domain::Tasks => list_records(&data.tasks, args, format),
        Domain::Risks => list_records(&data.risks, args, format),
        Domain::Disputes => list_records(&data.disputes, args, format),
        Domain::Policies => list_records(&data.policies, args, format),
        Domain::Vendors => list_records(&data.vendors, args, format),
        Domain::Compliance => list_records(&data.compliance, args, format),
    }
}

fn list_records<R>(records: &[R], args: &ListArgs, format: OutputFormat) -> Result<()>
where
    R: Listable + TableRow + Serialize,
{
    let mut query = parse_query::<R>(&args.search, &args.filters, args.sort.as_deref())?;
    if query.sort.is_none() && !args.unsorted {
        query.sort = R::default_sort();
    }

    let visible = apply_list_view(records, &query);
    info!(
        "event=list_view module=cli status=ok domain={} total={} visible={}",
        R::DOMAIN,
        records.len(),
        visible.len()
    );

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&visible)?),
        OutputFormat::Plain => print_table(&visible),
    }
    Ok(())
}

pub fn summary(
    context: &AppContext,
    route: &str,
    as_of: Option<NaiveDate>,
    format: OutputFormat,
) -> Result<()> {
    let domain = route_domain(route)?;
    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
    let data = context.data();

    match domain {
        Domain::Contracts => {
            let summary = ContractSummary::compute(&data.contracts, as_of);
            emit_summary(&summary, summary.cards(), format)
        }
        Domain::Matters => {
            let summary = MatterSummary::compute(&data.matters);
            emit_summary(&summary, summary.cards(), format)
        }
        Domain::Entities => {
            let summary = EntitySummary::compute(&data.entities);
            emit_summary(&summary, summary.cards(), format)
        }
        Domain::Tasks => {
            let summary = TaskSummary::compute(&data.tasks, as_of);
            emit_summary(&summary, summary.cards(), format)
        }
        Domain::Risks => {
            let summary = RiskSummary::compute(&data.risks);
            emit_summary(&summary, summary.cards(), format)
        }
        Domain::Disputes => {
            let summary = DisputeSummary::compute(&data.disputes);
            emit_summary(&summary, summary.cards(), format)
        }
        Domain::Policies => {
            let summary = PolicySummary::compute(&data.policies, as_of);
            emit_summary(&summary, summary.cards(), format)
        }
        Domain::Vendors => {
            let summary = VendorSummary::compute(&data.vendors);
            emit_summary(&summary, summary.cards(), format)
        }
        Domain::Compliance => {
            let summary = ComplianceSummary::compute(
                &data.compliance,
                &data.compliance_audits,
                &data.regulatory_updates,
            );
            emit_summary(&summary, summary.cards(), format)
        }
    }
}

fn emit_summary<S: Serialize>(summary: &S, cards: Vec<SummaryCard>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(summary)?),
        OutputFormat::Plain => print_cards(&cards),
    }
    Ok(())
}

pub fn facets(context: &AppContext, route: &str, field: &str, format: OutputFormat) -> Result<()> {
    let domain = route_domain(route)?;
    let data = context.data();
    let values = match domain {
        Domain::Contracts => facet_values(&data.contracts, field),
        Domain::Matters => facet_values(&data.matters, field),
        Domain::Entities => facet_values(&data.entities, field),
        Domain::Tasks => facet_values(&data.tasks, field),
        Domain::Risks => facet_values(&data.risks, field),
        Domain::Disputes => facet_values(&data.disputes, field),
        Domain::Policies => facet_values(&data.policies, field),
        Domain::Vendors => facet_values(&data.vendors, field),
        Domain::Compliance => facet_values(&data.compliance, field),
    }?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&values)?),
        OutputFormat::Plain => {
            println!("All");
            for value in values {
                println!("{value}");
            }
        }
    }
    Ok(())
}

pub struct ComplianceArgs {
    pub db: Option<PathBuf>,
    pub demo: bool,
    pub framework: String,
}

pub fn compliance(context: &AppContext, args: &ComplianceArgs, format: OutputFormat) -> Result<()> {
    let conn = if args.demo {
        let mut conn = open_db_in_memory().context("failed to open in-memory compliance store")?;
        seed_compliance_demo(&mut conn).context("failed to seed demo compliance rows")?;
        conn
    } else {
        let path = args
            .db
            .clone()
            .or_else(|| context.config().compliance_db.clone())
            .ok_or_else(|| anyhow!("no compliance store; pass --db, --demo or set compliance_db"))?;
        open_db(&path)
            .with_context(|| format!("failed to open compliance store `{}`", path.display()))?
    };

    let monitor = ComplianceMonitor::new(SqliteComplianceSource::new(&conn));
    let dashboard = match monitor.load() {
        ComplianceView::Loaded(dashboard) => dashboard,
        ComplianceView::Failed(failure) => bail!(failure.message()),
    };

    let selection = dashboard
        .select_framework(&args.framework)
        .ok_or_else(|| anyhow!("unknown framework `{}`", args.framework))?;
    let frameworks = dashboard.frameworks_for(&selection);

    if format == OutputFormat::Json {
        #[derive(Serialize)]
        struct Report<'a> {
            overall_score: Option<u8>,
            critical_alerts: usize,
            unacknowledged_critical: usize,
            unacknowledged: usize,
            pending_requirements: usize,
            frameworks: Vec<&'a counselflow_core::model::compliance::ComplianceFramework>,
            alerts: &'a [counselflow_core::model::compliance::ComplianceAlert],
        }
        let report = Report {
            overall_score: dashboard.overall_score(),
            critical_alerts: dashboard.critical_alerts(),
            unacknowledged_critical: dashboard.unacknowledged_critical(),
            unacknowledged: dashboard.unacknowledged(),
            pending_requirements: dashboard.pending_requirements(),
            frameworks,
            alerts: &dashboard.alerts,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let overall = dashboard
        .overall_score()
        .map(|score| format!("{score}%"))
        .unwrap_or_else(|| "n/a".to_string());
    let counts = dashboard.severity_counts();
    println!("Overall score         {overall}");
    println!(
        "Critical alerts       {} ({} unacknowledged)",
        dashboard.critical_alerts(),
        dashboard.unacknowledged_critical()
    );
    println!(
        "Unacknowledged alerts {} of {}",
        dashboard.unacknowledged(),
        dashboard.alerts.len()
    );
    println!("Pending requirements  {}", dashboard.pending_requirements());
    println!(
        "Alerts by severity    high+ {} / medium {} / low {}",
        counts.urgent, counts.medium, counts.low
    );
    println!();
    if !selection.is_all() {
        println!("Framework             {}", args.framework.trim());
    }
    print_table(&frameworks);
    println!();
    let alerts: Vec<_> = dashboard.alerts.iter().collect();
    print_table(&alerts);
    Ok(())
}

pub fn routes() {
    for (path, page) in ROUTES {
        let list = page
            .domain()
            .map(|domain| format!("  [{domain}]"))
            .unwrap_or_default();
        println!("{path:<36} {page}{list}");
    }
    println!();
    for (alias, target) in ALIASES {
        println!("{alias:<36} -> {target}");
    }
}

fn route_domain(route: &str) -> Result<Domain> {
    match resolve_route(route) {
        RouteResolution::Resolved { page, .. } => page_domain(page),
        RouteResolution::NotFound => bail!("no page at `{route}`"),
    }
}

fn page_domain(page: Page) -> Result<Domain> {
    page.domain()
        .ok_or_else(|| anyhow!("{page} has no list view"))
}
