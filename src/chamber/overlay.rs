//! Text overlay: the idle prompt, the revealed spark, and the footer caption.
//!
//! Everything here is hue-tinted from the [`Aura`] so the text drifts through
//! the color wheel together with the orb.

use bevy::prelude::*;
use bevy::text::Justify;
use std::f32::consts::PI;

use crate::chamber::{
    aura::Aura,
    easing::{ease_in_out_cubic, ease_out_cubic},
    ignite::CurrentSpark,
};

/// Seconds the spark text takes to fade in
const REVEAL_FADE: f32 = 0.5;

/// Pixels the spark text rises while fading in
const REVEAL_RISE: f32 = 10.0;

/// Idle prompt pulse period, seconds
const PULSE_PERIOD: f32 = 2.0;

#[derive(Component)]
pub struct PromptText;

#[derive(Component)]
pub struct SparkText;

#[derive(Component)]
pub struct CaptionText;

#[derive(Component)]
pub struct CaptionRule;

/// Spawn the overlay tree: message zone below the orb, caption at the foot
pub fn spawn_overlay(mut commands: Commands) {
    // Message zone: prompt and spark share the slot, one visible at a time
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Percent(60.0),
            left: Val::Px(0.0),
            right: Val::Px(0.0),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            padding: UiRect::horizontal(Val::Px(32.0)),
            ..default()
        })
        .with_children(|zone| {
            zone.spawn((
                PromptText,
                Text::new("CLICK TO IGNITE"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::NONE),
            ));

            zone.spawn((
                SparkText,
                Text::new(""),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::NONE),
                TextLayout::new_with_justify(Justify::Center),
                Node {
                    max_width: Val::Px(672.0),
                    ..default()
                },
            ));
        });

    // Footer caption with its flanking rules
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(24.0),
            left: Val::Px(0.0),
            right: Val::Px(0.0),
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            column_gap: Val::Px(12.0),
            ..default()
        })
        .with_children(|footer| {
            footer.spawn((
                CaptionRule,
                Node {
                    width: Val::Px(48.0),
                    height: Val::Px(1.0),
                    ..default()
                },
                BackgroundColor(Color::NONE),
            ));
            footer.spawn((
                CaptionText,
                Text::new("THE FIRST SPARK"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::NONE),
            ));
            footer.spawn((
                CaptionRule,
                Node {
                    width: Val::Px(48.0),
                    height: Val::Px(1.0),
                    ..default()
                },
                BackgroundColor(Color::NONE),
            ));
        });

    info!("Overlay spawned");
}

/// System: animate the overlay from the aura and the revealed spark
pub fn update_overlay(
    time: Res<Time>,
    aura: Res<Aura>,
    current: Res<CurrentSpark>,
    mut prompt_query: Query<
        &mut TextColor,
        (With<PromptText>, Without<SparkText>, Without<CaptionText>),
    >,
    mut spark_query: Query<
        (&mut Text, &mut TextColor, &mut Node),
        (With<SparkText>, Without<PromptText>, Without<CaptionText>),
    >,
    mut caption_query: Query<
        &mut TextColor,
        (With<CaptionText>, Without<PromptText>, Without<SparkText>),
    >,
    mut rule_query: Query<&mut BackgroundColor, With<CaptionRule>>,
) {
    let hue = aura.hue;

    // Idle prompt: pulse until the first spark lands
    if let Ok(mut prompt_color) = prompt_query.single_mut() {
        let alpha = if current.text.is_some() {
            0.0
        } else {
            0.55 + 0.15 * (time.elapsed_secs() * 2.0 * PI / PULSE_PERIOD).sin()
        };
        prompt_color.0 = Color::hsla(hue, 0.4, 0.6, alpha);
    }

    // Spark text: fade in and rise once revealed
    if let Ok((mut text, mut color, mut node)) = spark_query.single_mut() {
        match &current.text {
            Some(spark) => {
                if text.as_str() != spark {
                    *text = Text::new(spark.clone());
                }

                let t = (current.age / REVEAL_FADE).min(1.0);
                color.0 = Color::hsla(hue, 0.6, 0.8, ease_out_cubic(t));
                node.margin.top = Val::Px(REVEAL_RISE * (1.0 - ease_in_out_cubic(t)));
            }
            None => {
                color.0 = Color::NONE;
            }
        }
    }

    // Footer caption holds a steady, dimmer tint
    for mut caption_color in &mut caption_query {
        caption_color.0 = Color::hsla(hue, 0.4, 0.6, 0.4);
    }
    for mut rule_color in &mut rule_query {
        rule_color.0 = Color::hsla(hue, 0.6, 0.5, 0.4);
    }
}
