use leptos::html::Div;
use leptos::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys::MouseEvent;

use crate::{
    application::ChartApplicationService,
    domain::{
        chart::{AxisTick, BarRect, ChartConfig, ChartScene, Color, TooltipContent, TooltipState},
        gdp::GdpDataSource,
        logging::{LogComponent, get_logger},
    },
    event_utils::{cursor_on_page, cursor_within},
    infrastructure::{GdpHttpClient, rendering::TooltipOverlay},
};

/// 🦀 Root component: page chrome around the GDP chart
#[component]
pub fn App() -> impl IntoView {
    view! {
        <style>
            {r#"
            .gdp-chart-app {
                min-height: 100vh;
                background: #f9fafb;
                padding: 32px;
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
            }

            .chart-card {
                max-width: 72rem;
                margin: 0 auto;
                background: white;
                border-radius: 8px;
                box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                padding: 16px;
            }

            .gdp-chart {
                position: relative;
            }
            "#}
        </style>
        <div class="gdp-chart-app">
            <div class="chart-card">
                <GdpChart source=GdpHttpClient::new() />
            </div>
        </div>
    }
}

/// 📊 The chart itself. Owns the tooltip overlay and the single load from
/// `source`.
#[component]
pub fn GdpChart<S>(source: S) -> impl IntoView
where
    S: GdpDataSource + 'static,
{
    let scene = create_rw_signal::<Option<ChartScene>>(None);
    let tooltip = create_rw_signal(TooltipState::Hidden);
    let container_ref = create_node_ref::<Div>();
    let overlay: Rc<RefCell<Option<TooltipOverlay>>> = Rc::new(RefCell::new(None));
    let mounted = Rc::new(Cell::new(true));

    container_ref.on_load({
        let overlay = Rc::clone(&overlay);
        move |host| match TooltipOverlay::attach(&host) {
            Ok(tooltip_overlay) => *overlay.borrow_mut() = Some(tooltip_overlay),
            Err(e) => {
                crate::log_warn!(LogComponent::Presentation("GdpChart"), "Tooltip overlay unavailable: {}", e);
            }
        }
    });

    create_effect({
        let overlay = Rc::clone(&overlay);
        move |_| {
            let state = tooltip.get();
            if let Some(tooltip_overlay) = overlay.borrow().as_ref() {
                if let Err(e) = tooltip_overlay.apply(&state) {
                    crate::log_warn!(LogComponent::Presentation("GdpChart"), "Tooltip update failed: {}", e);
                }
            }
        }
    });

    let service = ChartApplicationService::new(source, ChartConfig::default());
    spawn_local({
        let mounted = Rc::clone(&mounted);
        async move {
            let outcome = service.load_scene().await;
            if !mounted.get() {
                get_logger().debug(
                    LogComponent::Presentation("GdpChart"),
                    "Dataset arrived after unmount, discarded",
                );
                return;
            }
            // Errors were logged by the service; the chart area stays empty.
            if let Ok(loaded) = outcome {
                scene.set(loaded);
            }
        }
    });

    on_cleanup(move || {
        mounted.set(false);
        overlay.borrow_mut().take();
        crate::log_debug!(LogComponent::Presentation("GdpChart"), "🧹 Chart unmounted, tooltip removed");
    });

    view! {
        <div class="gdp-chart" node_ref=container_ref>
            {move || {
                scene
                    .get()
                    .map(|scene| view! { <ChartSvg scene=scene tooltip=tooltip container_ref=container_ref /> })
            }}
        </div>
    }
}

/// SVG drawing of a computed scene: title, axes, bars, axis labels.
/// Hovering a bar drives `tooltip`; positions are relative to `container_ref`.
#[component]
pub fn ChartSvg(scene: ChartScene, tooltip: RwSignal<TooltipState>, container_ref: NodeRef<Div>) -> impl IntoView {
    let config = scene.config.clone();
    let draw_width = scene.scales.draw_width;
    let draw_height = scene.scales.draw_height;
    let bar_fill = config.bar_color.to_css();
    let title_style = format!("font-size: 28px; font-weight: bold; fill: {};", Color::TITLE.to_css());

    let x_ticks = scene.x_ticks.iter().map(x_tick_view).collect_view();
    let y_ticks = scene.y_ticks.iter().map(y_tick_view).collect_view();
    let bars = scene
        .bars
        .iter()
        .cloned()
        .map(|bar| view! { <Bar bar=bar fill=bar_fill.clone() tooltip=tooltip container_ref=container_ref /> })
        .collect_view();

    view! {
        <svg width=config.width height=config.height>
            <text id="title" x={config.width / 2.0} y="40" text-anchor="middle" style=title_style>
                {config.title}
            </text>
            <g transform=scene.plot_transform()>
                <g id="x-axis" transform=format!("translate(0,{})", draw_height)>
                    <path class="domain" stroke="currentColor" fill="none" d=format!("M0,6V0H{}V6", draw_width)></path>
                    {x_ticks}
                </g>
                <g id="y-axis">
                    <path class="domain" stroke="currentColor" fill="none" d=format!("M-6,{}H0V0H-6", draw_height)></path>
                    {y_ticks}
                </g>
                {bars}
                <text transform="rotate(-90)" y="-60" x={-draw_height / 2.0} style="text-anchor: middle; font-size: 14px;">
                    {config.y_axis_label}
                </text>
                <text y={draw_height + 50.0} x={draw_width / 2.0} style="text-anchor: middle; font-size: 14px;">
                    {config.x_axis_note}
                </text>
            </g>
        </svg>
    }
}

fn x_tick_view(tick: &AxisTick) -> View {
    view! {
        <g class="tick" transform=format!("translate({},0)", tick.offset)>
            <line stroke="currentColor" y2="6"></line>
            <text fill="currentColor" y="9" dy="0.71em" text-anchor="middle">{tick.label.clone()}</text>
        </g>
    }
    .into_view()
}

fn y_tick_view(tick: &AxisTick) -> View {
    view! {
        <g class="tick" transform=format!("translate(0,{})", tick.offset)>
            <line stroke="currentColor" x2="-6"></line>
            <text fill="currentColor" x="-9" dy="0.32em" text-anchor="end">{tick.label.clone()}</text>
        </g>
    }
    .into_view()
}

/// One bar with its hover handlers
#[component]
fn Bar(bar: BarRect, fill: String, tooltip: RwSignal<TooltipState>, container_ref: NodeRef<Div>) -> impl IntoView {
    let content = TooltipContent::for_bar(&bar);

    let on_hover = move |ev: MouseEvent| {
        let (x, y) = match container_ref.get_untracked() {
            Some(host) => cursor_within(&host, &ev),
            None => cursor_on_page(&ev),
        };
        tooltip.update(|state| state.show(content.clone(), x, y));
    };
    let on_leave = move |_: MouseEvent| tooltip.update(TooltipState::hide);

    view! {
        <rect
            class="bar"
            x=bar.x
            y=bar.y
            width=bar.width
            height=bar.height
            data-date=bar.data_date.clone()
            data-gdp=bar.data_gdp
            style=format!("fill: {};", fill)
            on:mouseover=on_hover
            on:mouseout=on_leave
        ></rect>
    }
}
