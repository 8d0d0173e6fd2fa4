use std::rc::Rc;

use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::analytics::{CategoryTotal, TimelinePoint};
use shared::transaction::parse_transaction_date;
use shared::AnalyticsSnapshot;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::services::format::format_currency;

const CANVAS_WIDTH: u32 = 480;
const CANVAS_HEIGHT: u32 = 280;

const PALETTE: [RGBColor; 10] = [
    RGBColor(107, 139, 255),
    RGBColor(154, 107, 255),
    RGBColor(247, 127, 148),
    RGBColor(247, 196, 108),
    RGBColor(73, 198, 175),
    RGBColor(61, 90, 128),
    RGBColor(46, 134, 171),
    RGBColor(255, 159, 28),
    RGBColor(231, 111, 81),
    RGBColor(131, 56, 236),
];
const LABEL_COLOR: RGBColor = RGBColor(102, 126, 234);
const BUDGET_COLOR: RGBColor = RGBColor(31, 187, 166);
const SPEND_COLOR: RGBColor = RGBColor(247, 127, 148);
const CREDIT_COLOR: RGBColor = RGBColor(73, 198, 175);

#[derive(Properties, PartialEq)]
pub struct SpendingChartsProps {
    pub snapshot: Rc<AnalyticsSnapshot>,
    pub currency: String,
}

/// The three dashboard charts: spending by category, the signed
/// transaction timeline and budget against this month's spend.
pub struct SpendingCharts {
    category_ref: NodeRef,
    timeline_ref: NodeRef,
    budget_ref: NodeRef,
}

impl Component for SpendingCharts {
    type Message = ();
    type Properties = SpendingChartsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            category_ref: NodeRef::default(),
            timeline_ref: NodeRef::default(),
            budget_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        ctx.props() != old_props
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        self.draw(ctx.props());
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let snapshot = &ctx.props().snapshot;

        html! {
            <div class="grid three charts">
                <div class="chart">
                    <h3>{"Spending by category"}</h3>
                    {if snapshot.category_totals.is_empty() {
                        html! { <p class="chart-empty muted">{"No debit transactions yet"}</p> }
                    } else {
                        html! { <canvas ref={self.category_ref.clone()} class="rust-chart-canvas"></canvas> }
                    }}
                </div>
                <div class="chart">
                    <h3>{"Transaction timeline"}</h3>
                    {if snapshot.timeline.is_empty() {
                        html! { <p class="chart-empty muted">{"No transactions yet"}</p> }
                    } else {
                        html! { <canvas ref={self.timeline_ref.clone()} class="rust-chart-canvas"></canvas> }
                    }}
                </div>
                <div class="chart">
                    <h3>{"Budget tracking"}</h3>
                    <canvas ref={self.budget_ref.clone()} class="rust-chart-canvas"></canvas>
                </div>
            </div>
        }
    }
}

impl SpendingCharts {
    fn draw(&self, props: &SpendingChartsProps) {
        let snapshot = &props.snapshot;
        let currency = props.currency.as_str();

        if let Some(canvas) = prepare_canvas(&self.category_ref) {
            draw_category_bars(canvas, &snapshot.category_totals, currency);
        }
        if let Some(canvas) = prepare_canvas(&self.timeline_ref) {
            draw_timeline(canvas, &snapshot.timeline, currency);
        }
        if let Some(canvas) = prepare_canvas(&self.budget_ref) {
            draw_budget_bars(canvas, snapshot.budget, snapshot.monthly_spend, currency);
        }
    }
}

fn prepare_canvas(node: &NodeRef) -> Option<HtmlCanvasElement> {
    let canvas = node.cast::<HtmlCanvasElement>()?;
    canvas.set_width(CANVAS_WIDTH);
    canvas.set_height(CANVAS_HEIGHT);
    Some(canvas)
}

/// Y axis bounds that always include zero, padded by a tenth of the span
fn value_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let span = (hi - lo).max(1.0);
    let pad = span * 0.1;
    let bottom = if lo < 0.0 { lo - pad } else { 0.0 };
    (bottom, lo + span + pad)
}

fn segment_label(value: &SegmentValue<i32>, names: &[&str]) -> String {
    match value {
        SegmentValue::CenterOf(index) if *index >= 0 => {
            names.get(*index as usize).map(|name| name.to_string()).unwrap_or_default()
        }
        _ => String::new(),
    }
}

/// Axis label for a timeline date; unparsable dates keep their raw text
fn short_date(raw: &str) -> String {
    match parse_transaction_date(raw) {
        Some(parsed) => parsed.format("%m/%d").to_string(),
        None => raw.chars().take(10).collect(),
    }
}

fn bar_chart(canvas: HtmlCanvasElement, bars: &[(&str, f64, RGBColor)], currency: &str) -> Option<()> {
    let backend = CanvasBackend::with_canvas_object(canvas)?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE).ok()?;

    let names: Vec<&str> = bars.iter().map(|(name, _, _)| *name).collect();
    let (y_min, y_max) = value_bounds(bars.iter().map(|(_, value, _)| *value));

    let mut chart = ChartBuilder::on(&root)
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d((0..bars.len() as i32).into_segmented(), y_min..y_max)
        .ok()?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(bars.len())
        .x_label_formatter(&|v| segment_label(v, &names))
        .y_label_formatter(&|v| format_currency(*v, currency))
        .label_style(("sans-serif", 12, &LABEL_COLOR))
        .axis_style(RGBColor(230, 230, 230))
        .bold_line_style(RGBColor(245, 245, 245))
        .light_line_style(RGBColor(250, 250, 250))
        .y_labels(6)
        .draw()
        .ok()?;

    chart
        .draw_series(bars.iter().enumerate().map(|(index, (_, value, color))| {
            let index = index as i32;
            Rectangle::new(
                [(SegmentValue::Exact(index), 0.0), (SegmentValue::Exact(index + 1), *value)],
                color.filled(),
            )
        }))
        .ok()?;

    root.present().ok()
}

fn draw_category_bars(canvas: HtmlCanvasElement, totals: &[CategoryTotal], currency: &str) -> Option<()> {
    let bars: Vec<(&str, f64, RGBColor)> = totals
        .iter()
        .enumerate()
        .map(|(index, total)| (total.name.as_str(), total.total, PALETTE[index % PALETTE.len()]))
        .collect();
    bar_chart(canvas, &bars, currency)
}

fn draw_budget_bars(canvas: HtmlCanvasElement, budget: f64, spend: f64, currency: &str) -> Option<()> {
    bar_chart(
        canvas,
        &[("Budget", budget, BUDGET_COLOR), ("This month", spend, SPEND_COLOR)],
        currency,
    )
}

/// Signed amounts in timeline order. Points are spaced by position, so
/// transactions with unparsable dates still get a slot at the start.
fn draw_timeline(canvas: HtmlCanvasElement, points: &[TimelinePoint], currency: &str) -> Option<()> {
    if points.is_empty() {
        return None;
    }
    let backend = CanvasBackend::with_canvas_object(canvas)?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE).ok()?;

    let x_max = (points.len().max(2) - 1) as f64;
    let (y_min, y_max) = value_bounds(points.iter().map(|point| point.amount));

    let mut chart = ChartBuilder::on(&root)
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..x_max, y_min..y_max)
        .ok()?;

    chart
        .configure_mesh()
        .x_labels(points.len().min(6))
        .x_label_formatter(&|x| {
            points
                .get(x.round().max(0.0) as usize)
                .map(|point| short_date(&point.date))
                .unwrap_or_default()
        })
        .y_label_formatter(&|v| format_currency(*v, currency))
        .label_style(("sans-serif", 12, &LABEL_COLOR))
        .axis_style(RGBColor(230, 230, 230))
        .bold_line_style(RGBColor(245, 245, 245))
        .light_line_style(RGBColor(250, 250, 250))
        .y_labels(6)
        .draw()
        .ok()?;

    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(0.0, 0.0), (x_max, 0.0)],
            RGBColor(200, 200, 200).stroke_width(1),
        )))
        .ok()?;

    chart
        .draw_series(LineSeries::new(
            points.iter().enumerate().map(|(index, point)| (index as f64, point.amount)),
            LABEL_COLOR.stroke_width(2),
        ))
        .ok()?;

    chart
        .draw_series(points.iter().enumerate().map(|(index, point)| {
            let color = if point.amount < 0.0 { SPEND_COLOR } else { CREDIT_COLOR };
            Circle::new((index as f64, point.amount), 3, color.filled())
        }))
        .ok()?;

    root.present().ok()
}
