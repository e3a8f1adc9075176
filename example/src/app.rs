use circle_indicator::{CircleIndicatorArgs, CircleIndicatorController, circle_indicator};
use tessera_components::{
    alignment::{CrossAxisAlignment, MainAxisAlignment},
    column::{ColumnArgs, column},
    modifier::ModifierExt as _,
    row::{RowArgs, row},
    slider::{SliderArgs, slider},
    spacer::{SpacerArgs, spacer},
    text::{TextArgs, text},
    theme::{MaterialTheme, MaterialThemeProviderArgs, material_theme},
};
use tessera_ui::{Dp, Modifier, remember, tessera};

#[tessera]
pub fn app() {
    let args = MaterialThemeProviderArgs::new(MaterialTheme::default, content);
    material_theme(&args);
}

#[tessera]
fn content() {
    // A plain indicator with the stock style, and a styled one driven
    // through the hex color setters. Both share the slider below.
    let plain = remember(|| {
        CircleIndicatorController::from_args(
            &CircleIndicatorArgs::default().value(40.0).text("40").suffix("%"),
        )
    });
    let styled = remember(|| {
        let mut controller = CircleIndicatorController::from_args(
            &CircleIndicatorArgs::default()
                .value(80.0)
                .max_value(200.0)
                .rounded_corners(true)
                .stroke_width(Dp(14.0))
                .background_width(Dp(6.0))
                .text_size(Dp(24.0))
                .text("80")
                .prefix("$"),
        );
        controller
            .set_progress_color_hex("#FF8000")
            .expect("valid hex color");
        controller
            .set_background_color_hex("#DDDDDD")
            .expect("valid hex color");
        controller
            .set_text_color_hex("#FF8000")
            .expect("valid hex color");
        controller
    });

    column(
        ColumnArgs::default()
            .modifier(Modifier::new().fill_max_size())
            .main_axis_alignment(MainAxisAlignment::Center)
            .cross_axis_alignment(CrossAxisAlignment::Center),
        move |scope| {
            scope.child(|| {
                text(&TextArgs::default().text("Drag the slider to update both indicators."));
            });
            scope.child(|| spacer(&SpacerArgs::new(Modifier::new().height(Dp(16.0)))));

            scope.child(move || {
                row(RowArgs::default(), move |scope| {
                    scope.child(move || {
                        circle_indicator(
                            &CircleIndicatorArgs::default()
                                .modifier(Modifier::new().size(Dp(160.0), Dp(160.0)))
                                .controller(plain),
                        );
                    });
                    scope.child(|| spacer(&SpacerArgs::new(Modifier::new().width(Dp(24.0)))));
                    scope.child(move || {
                        circle_indicator(
                            &CircleIndicatorArgs::default()
                                .modifier(Modifier::new().size(Dp(160.0), Dp(160.0)))
                                .controller(styled),
                        );
                    });
                });
            });

            scope.child(|| spacer(&SpacerArgs::new(Modifier::new().height(Dp(24.0)))));
            scope.child(move || {
                let fraction = plain.with(|c| c.progress() / c.max_value());
                slider(
                    &SliderArgs::default()
                        .value(fraction)
                        .modifier(Modifier::new().width(Dp(280.0)))
                        .on_change(move |fraction| {
                            plain.with_mut(|c| {
                                let value = fraction * c.max_value();
                                c.set_progress(value);
                                c.set_text(format!("{value:.0}"));
                            });
                            styled.with_mut(|c| {
                                let value = fraction * c.max_value();
                                c.set_progress(value);
                                c.set_text(format!("{value:.0}"));
                            });
                        }),
                );
            });
        },
    );
}
