use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend},
    element::{
        AreaStyle, AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, LineStyle,
        LineStyleType, SplitLine, TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::{Bar, Line, Pie},
};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::report::ChartSeries;
use crate::utils::debounce::on_resize_debounced;

/// Palette cycled through by pie slices
const CHART_COLORS: [&str; 7] = [
    "#6366F1", "#10B981", "#F59E0B", "#EF4444", "#3B82F6", "#8B5CF6", "#EC4899",
];

const LEGEND_COLOR: &str = "#334155";
const AXIS_COLOR: &str = "#64748b";
const GRID_COLOR: &str = "#e2e8f0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Pie,
    Bar,
    Line,
}

#[derive(Properties, PartialEq)]
pub struct ChartProps {
    /// DOM id of the render target; must be unique on the page
    pub id: AttrValue,
    pub kind: ChartKind,
    pub series: Rc<ChartSeries>,
}

#[function_component(Chart)]
pub fn chart(props: &ChartProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();

        use_effect_with(
            (props.series.clone(), props.kind, props.id.clone(), container_ref),
            |(series, kind, id, container_ref)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    render_chart(&container, id, *kind, series);

                    let series = series.clone();
                    let kind = *kind;
                    let id = id.clone();
                    on_resize_debounced(
                        move || render_chart(&container, &id, kind, &series),
                        Config::CHART_RESIZE_DEBOUNCE_MS,
                    )
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={props.id.clone()} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, id: &str, kind: ChartKind, series: &ChartSeries) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 || series.is_empty() {
        return;
    }

    let chart = build_chart(kind, series);
    if let Err(e) = WasmRenderer::new(width, height).render(id, &chart) {
        web_sys::console::error_1(&format!("Render error: {e:?}").into());
    }
}

/// Builds the chart options for one series
pub fn build_chart(kind: ChartKind, series: &ChartSeries) -> CharmingChart {
    let legend = Legend::new()
        .top("0")
        .text_style(TextStyle::new().font_size(12).color(LEGEND_COLOR));

    match kind {
        ChartKind::Pie => CharmingChart::new()
            .color(CHART_COLORS.to_vec())
            .legend(legend)
            .tooltip(Tooltip::new().trigger(Trigger::Item))
            .series(
                Pie::new()
                    .name(series.name)
                    .radius("65%")
                    .center(vec!["50%", "58%"])
                    .data(series.pairs()),
            ),
        ChartKind::Bar => cartesian_chart(series, legend).series(
            Bar::new()
                .name(series.name)
                .item_style(ItemStyle::new().color("#3B82F6"))
                .data(series.values.clone()),
        ),
        ChartKind::Line => cartesian_chart(series, legend).series(
            Line::new()
                .name(series.name)
                .smooth(true)
                .item_style(ItemStyle::new().color("#10B981"))
                .line_style(LineStyle::new().color("#10B981"))
                .area_style(AreaStyle::new().color("rgba(16, 185, 129, 0.2)"))
                .data(series.values.clone()),
        ),
    }
}

/// Shared frame of the bar and line charts. Product titles are too long for the
/// category axis, so its labels are hidden and shown in the tooltip instead.
fn cartesian_chart(series: &ChartSeries, legend: Legend) -> CharmingChart {
    CharmingChart::new()
        .legend(legend)
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("4%")
                .right("4%")
                .bottom("4%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(series.labels.clone())
                .axis_label(AxisLabel::new().show(false)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().color(AXIS_COLOR))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(GRID_COLOR)
                            .type_(LineStyleType::Solid),
                    ),
                ),
        )
}
