use std::{collections::HashMap, time::Instant};

use log::{error, info};

use bevy_ecs::{
    entity::Entity,
    event::{EventReader, EventWriter, Events},
    system::ResMut,
    world::{Mut, World},
};

use sabor_shared::{Guide, IngredientConfig, MarkerOutcome};

use crate::{
    components::IngredientVisual,
    events::{
        AnchorRegisteredEvent, HighlightCommand, MarkersChangedEvent, RecipeNavigation,
        StepChangedEvent,
    },
    resources::{GuideSetup, GuideState, RecipeState},
    scene::BevyScene,
};

pub fn init_guide(world: &mut World) {
    let Some(setup) = world.remove_resource::<GuideSetup>() else {
        return;
    };

    // earliest spawned visual wins if a display name is tagged twice
    let mut visuals: HashMap<String, Entity> = HashMap::new();
    let mut query = world.query::<(Entity, &IngredientVisual)>();
    for (entity, visual) in query.iter(world) {
        match visuals.get(&visual.display_name) {
            Some(existing) => {
                error!(
                    "more than one IngredientVisual is tagged {:?}",
                    visual.display_name
                );
                if entity < *existing {
                    visuals.insert(visual.display_name.clone(), entity);
                }
            }
            None => {
                visuals.insert(visual.display_name.clone(), entity);
            }
        }
    }

    let ingredients = setup
        .ingredients
        .into_iter()
        .map(|spec| {
            let visual = visuals.get(&spec.display_name).copied();
            IngredientConfig::new(&spec.marker_payload, &spec.display_name, visual)
        })
        .collect();

    let mut guide = match Guide::new(setup.config, ingredients) {
        Ok(guide) => guide,
        Err(err) => {
            error!("guide configuration rejected: {}", err);
            return;
        }
    };

    guide.startup(&mut BevyScene::new(world));
    world.insert_resource(GuideState::new(guide));
}

pub fn request_recipe(mut recipe: ResMut<RecipeState>) {
    if let Some(request) = recipe.request.take() {
        info!("requesting recipe {:?}", request.recipe_id);
        recipe.loader.request(request.source, &request.recipe_id);
    }
}

pub fn receive_markers(world: &mut World) {
    if !world.contains_resource::<GuideState>() {
        return;
    }
    let batches: Vec<MarkersChangedEvent> = world
        .resource_mut::<Events<MarkersChangedEvent>>()
        .drain()
        .collect();
    if batches.is_empty() {
        return;
    }
    let now = Instant::now();

    let registered = world.resource_scope(|world, mut state: Mut<GuideState>| {
        let mut registered = Vec::new();
        let mut scene = BevyScene::new(world);
        for batch in &batches {
            let outcomes = state.guide.on_markers_changed(&mut scene, &batch.0, &now);
            for outcome in outcomes {
                let MarkerOutcome::Registered(key) = outcome else {
                    continue;
                };
                let Some(entry) = state.guide.registry().entry(&key) else {
                    continue;
                };
                if let Some(anchor) = entry.anchor() {
                    registered.push(AnchorRegisteredEvent {
                        display_name: entry.display_name().to_string(),
                        anchor,
                    });
                }
            }
        }
        registered
    });

    let mut event_writer = world.resource_mut::<Events<AnchorRegisteredEvent>>();
    for event in registered {
        event_writer.send(event);
    }
}

pub fn receive_recipe(
    mut recipe: ResMut<RecipeState>,
    mut navigation_reader: EventReader<RecipeNavigation>,
    mut step_writer: EventWriter<StepChangedEvent>,
) {
    let recipe = &mut *recipe;

    if let Some(Ok(loaded)) = recipe.loader.poll() {
        if let Some(change) = recipe.cursor.load(loaded) {
            step_writer.write(StepChangedEvent(change.ingredient));
        }
    }

    for navigation in navigation_reader.read() {
        let change = match navigation {
            RecipeNavigation::Next => recipe.cursor.next(),
            RecipeNavigation::Previous => recipe.cursor.previous(),
        };
        if let Some(change) = change {
            info!("recipe step {}", recipe.cursor.counter_label());
            step_writer.write(StepChangedEvent(change.ingredient));
        }
    }
}

pub fn handle_steps(world: &mut World) {
    if !world.contains_resource::<GuideState>() {
        return;
    }
    let step_changes: Vec<StepChangedEvent> = world
        .resource_mut::<Events<StepChangedEvent>>()
        .drain()
        .collect();
    if step_changes.is_empty() {
        return;
    }

    world.resource_scope(|world, mut state: Mut<GuideState>| {
        let mut scene = BevyScene::new(world);
        for step_change in step_changes {
            let _ = state
                .guide
                .on_step_changed(&mut scene, step_change.0.as_deref());
        }
    });
}

pub fn handle_highlight_commands(world: &mut World) {
    if !world.contains_resource::<GuideState>() {
        return;
    }
    let commands: Vec<HighlightCommand> = world
        .resource_mut::<Events<HighlightCommand>>()
        .drain()
        .collect();
    if commands.is_empty() {
        return;
    }

    world.resource_scope(|world, mut state: Mut<GuideState>| {
        let mut scene = BevyScene::new(world);
        for command in commands {
            match command {
                HighlightCommand::SetVisible { display_name, show } => {
                    let _ = state.guide.set_visible(&mut scene, &display_name, show);
                }
                HighlightCommand::HideAll => state.guide.hide_all(&mut scene),
            }
        }
    });
}

pub fn update_highlights(world: &mut World) {
    if !world.contains_resource::<GuideState>() {
        return;
    }
    let now = Instant::now();

    world.resource_scope(|world, mut state: Mut<GuideState>| {
        let mut scene = BevyScene::new(world);
        state.guide.update(&mut scene, &now);
    });
}
