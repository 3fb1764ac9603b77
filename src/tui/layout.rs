//! Dashboard layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, Paragraph, Sparkline, Wrap};

use crate::sim::balance::HydroMode;
use crate::sim::types::DAY_LABELS;

use super::runtime::{App, Control};
use super::style;

/// Renders the full dashboard frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // header
            Constraint::Min(12),    // generation mix chart
            Constraint::Length(5),  // export sparkline
            Constraint::Length(8),  // sliders / KPIs / advisory
            Constraint::Length(1),  // footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_mix_chart(frame, app, chunks[1]);
    render_export(frame, app, chunks[2]);
    render_panels(frame, app, chunks[3]);
    render_footer(frame, chunks[4]);
}

/// Header bar: scenario name, month, horizon, dispatch mode.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let mode = match app.input.hydro_mode {
        HydroMode::Residual { .. } => "residual",
        HydroMode::Flat { .. } => "flat",
    };
    let header = Line::from(vec![
        Span::styled(
            " GRIDMIX ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            &app.scenario_name,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " │ {} │ horizon {} │ hydro: {} ",
            app.input.month.label(),
            app.input.planning_year.label(),
            mode,
        )),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Stacked generation mix vs demand over the week.
///
/// The stacked area is drawn as cumulative lines: hydro, hydro+wind,
/// hydro+wind+solar, with the demand line on top.
fn render_mix_chart(frame: &mut Frame, app: &App, area: Rect) {
    let hydro: Vec<(f64, f64)> = app
        .records
        .iter()
        .map(|r| (r.hour as f64, f64::from(r.hydro_gw)))
        .collect();
    let hydro_wind: Vec<(f64, f64)> = app
        .records
        .iter()
        .map(|r| (r.hour as f64, f64::from(r.hydro_gw + r.wind_gw)))
        .collect();
    let total_gen: Vec<(f64, f64)> = app
        .records
        .iter()
        .map(|r| (r.hour as f64, f64::from(r.hydro_gw + r.wind_gw + r.solar_gw)))
        .collect();
    let demand: Vec<(f64, f64)> = app
        .records
        .iter()
        .map(|r| (r.hour as f64, f64::from(r.demand_gw)))
        .collect();

    let y_hi = style::y_upper_bound(&[&demand, &total_gen]);

    let datasets = vec![
        Dataset::default()
            .name("Hydro")
            .marker(symbols::Marker::Braille)
            .style(Style::default().fg(style::HYDRO_COLOR))
            .data(&hydro),
        Dataset::default()
            .name("+Wind")
            .marker(symbols::Marker::Braille)
            .style(Style::default().fg(style::WIND_COLOR))
            .data(&hydro_wind),
        Dataset::default()
            .name("+Solar")
            .marker(symbols::Marker::Braille)
            .style(Style::default().fg(style::SOLAR_COLOR))
            .data(&total_gen),
        Dataset::default()
            .name("Demand")
            .marker(symbols::Marker::Dot)
            .style(Style::default().fg(style::DEMAND_COLOR))
            .data(&demand),
    ];

    // One label per day, every 24 samples.
    let x_labels: Vec<String> = DAY_LABELS.iter().map(|d| (*d).to_string()).collect();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(" Generation Mix vs Demand (GW, 168 h) ")
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .bounds([0.0, 167.0])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("GW")
                .bounds([0.0, y_hi])
                .labels(vec!["0".to_string(), format!("{y_hi:.0}")]),
        );

    frame.render_widget(chart, area);
}

/// Hourly export bar panel.
fn render_export(frame: &mut Frame, app: &App, area: Rect) {
    // Sparkline wants unsigned integers; scale GW by 100 for resolution.
    let data: Vec<u64> = app
        .records
        .iter()
        .map(|r| (f64::from(r.export_gw) * 100.0).round() as u64)
        .collect();
    let cap = (f64::from(app.input.interconnector_gw) * 100.0).round() as u64;

    let spark = Sparkline::default()
        .block(
            Block::default()
                .title(format!(
                    " Export to market (cap {:.1} GW, total {:.1} GWh) ",
                    app.input.interconnector_gw, app.kpi.export_total_gwh
                ))
                .borders(Borders::ALL),
        )
        .data(&data)
        .max(cap.max(1))
        .style(Style::default().fg(style::EXPORT_COLOR));
    frame.render_widget(spark, area);
}

/// Bottom row: sliders, KPI tiles, and the seasonal advisory.
fn render_panels(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(40),
            Constraint::Length(34),
            Constraint::Min(24),
        ])
        .split(area);

    render_sliders(frame, app, chunks[0]);
    render_kpis(frame, app, chunks[1]);
    render_advisory(frame, app, chunks[2]);
}

/// Capacity slider panel with the selected row highlighted.
fn render_sliders(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::with_capacity(Control::ALL.len() + 1);
    for control in Control::ALL {
        let (min, max, _) = control.bounds();
        let marker = if control == app.selected { "▶" } else { " " };
        let text = format!(
            " {marker} {:<18} {:>5.1} GW  [{:.0}–{:.0}]",
            control.label(),
            app.value(control),
            min,
            max,
        );
        let style_row = if control == app.selected {
            Style::default()
                .fg(style::SELECTED_FG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(text, style_row)));
    }
    lines.push(Line::from(format!(
        "   month {}  horizon {}",
        app.input.month.label(),
        app.input.planning_year.label(),
    )));

    let block = Block::default().title(" Asset Mix ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// KPI tile panel (the four headline metrics).
fn render_kpis(frame: &mut Frame, app: &App, area: Rect) {
    let k = &app.kpi;
    let shortage_style = if k.peak_shortage_gw > 0.0 {
        Style::default().fg(style::SHORTAGE_COLOR)
    } else {
        Style::default()
    };
    let lines = vec![
        Line::from(format!(" Avg demand     {:>8.1} GW", k.avg_demand_gw)),
        Line::from(format!(" VRE yield      {:>8.1} %", k.vre_yield_pct)),
        Line::from(Span::styled(
            format!(
                " Peak shortage  {:>8.2} GW ({} h)",
                k.peak_shortage_gw, k.shortage_hours
            ),
            shortage_style,
        )),
        Line::from(format!(" Export revenue {:>8.1} k$", k.export_revenue_kusd)),
    ];

    let block = Block::default().title(" KPIs ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Seasonal advisory panel with severity coloring.
fn render_advisory(frame: &mut Frame, app: &App, area: Rect) {
    let color = style::severity_color(app.advisory.severity);
    let paragraph = Paragraph::new(Line::from(Span::styled(
        app.advisory.text,
        Style::default().fg(color),
    )))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(" Seasonal Summary ")
            .borders(Borders::ALL),
    );
    frame.render_widget(paragraph, area);
}

/// Footer with keybinding hints.
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        " q:Quit  ↑/↓:Select  ←/→:Adjust  m/M:Month  y:Horizon  d:Dispatch  1/2/3:Preset  r:Reset",
        Style::default().fg(style::FOOTER_FG),
    )));
    frame.render_widget(footer, area);
}
