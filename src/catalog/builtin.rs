//! The builtin command set.
//!
//! Pattern lists lean toward short, high-signal phrasings; the fuzzy
//! cascade handles the rest. Example utterances double as regression
//! fixtures: the catalog tests resolve every example and assert it lands
//! on its own command.

use super::{Command, CommandCategory, PARAM_DIRECTION, PARAM_TITLE, ParamKind};

pub(super) fn commands() -> Vec<Command> {
    vec![
        Command::new(
            "add_task",
            "tasks.add",
            CommandCategory::Task,
            "Add a freeform item to the checklist",
        )
        .with_pattern("add task")
        .with_pattern("new task")
        .with_pattern("add item")
        .with_pattern("put on list")
        .with_param(PARAM_TITLE, ParamKind::Text)
        .with_example("add task clean the kitchen")
        .with_example("new task water the plants"),
        Command::new(
            "complete_task",
            "tasks.complete",
            CommandCategory::Task,
            "Mark the current item done",
        )
        .with_pattern("complete task")
        .with_pattern("task complete")
        .with_pattern("i finished it")
        .with_pattern("mark it done")
        .with_pattern("check it off")
        .with_example("complete task")
        .with_example("i finished it"),
        Command::new(
            "skip_task",
            "tasks.skip",
            CommandCategory::Task,
            "Skip the current item for now",
        )
        .with_pattern("skip task")
        .with_pattern("skip this one")
        .with_pattern("come back later")
        .with_example("skip this one"),
        Command::new(
            "next_task",
            "tasks.next",
            CommandCategory::Task,
            "Advance to the next item",
        )
        .with_pattern("next task")
        .with_pattern("go to next")
        .with_pattern("move on")
        .with_example("next task"),
        Command::new(
            "move_task",
            "tasks.reorder",
            CommandCategory::Task,
            "Move the current item up or down the list",
        )
        .with_pattern("move task")
        .with_pattern("move task up")
        .with_pattern("move task down")
        .with_pattern("more important")
        .with_pattern("less important")
        .with_param(PARAM_DIRECTION, ParamKind::Text)
        .with_example("move task up")
        .with_example("make it less important"),
        Command::new(
            "remove_task",
            "tasks.remove",
            CommandCategory::Task,
            "Remove the current item from the checklist",
        )
        .with_pattern("remove task")
        .with_pattern("delete task")
        .with_pattern("take it off")
        .with_example("delete task"),
        Command::new(
            "read_list",
            "query.list",
            CommandCategory::Query,
            "Read the checklist out loud",
        )
        .with_pattern("read my list")
        .with_pattern("read the list")
        .with_pattern("whats on the list")
        .with_example("read the list"),
        Command::new(
            "remaining_count",
            "query.remaining",
            CommandCategory::Query,
            "Say how many items are left",
        )
        .with_pattern("how many left")
        .with_pattern("whats left")
        .with_pattern("how many to go")
        .with_example("how many left"),
        Command::new(
            "go_home",
            "nav.home",
            CommandCategory::Navigation,
            "Go back to the home screen",
        )
        .with_pattern("go home")
        .with_pattern("home screen")
        .with_pattern("main menu")
        .with_example("go home"),
        Command::new(
            "show_tasks",
            "nav.tasks",
            CommandCategory::Navigation,
            "Open the checklist screen",
        )
        .with_pattern("show tasks")
        .with_pattern("show checklist")
        .with_pattern("open checklist")
        .with_example("show tasks"),
        Command::new(
            "new_photo",
            "nav.capture",
            CommandCategory::Navigation,
            "Start a new room scan",
        )
        .with_pattern("new photo")
        .with_pattern("take a photo")
        .with_pattern("scan the room")
        .with_example("scan the room"),
        Command::new(
            "encourage",
            "companion.encourage",
            CommandCategory::Companion,
            "Ask the companion for a pep talk",
        )
        .with_pattern("encourage me")
        .with_pattern("cheer me on")
        .with_pattern("i need motivation")
        .with_example("cheer me on"),
        Command::new(
            "greet",
            "companion.greet",
            CommandCategory::Companion,
            "Say hello to the companion",
        )
        .with_pattern("hello")
        .with_pattern("hey buddy")
        .with_pattern("good morning")
        .with_example("hello"),
        Command::new(
            "take_break",
            "companion.break",
            CommandCategory::Companion,
            "Pause the session for a breather",
        )
        .with_pattern("take a break")
        .with_pattern("i need a break")
        .with_pattern("pause for now")
        .with_example("i need a break"),
        Command::new(
            "stop_listening",
            "settings.voice_off",
            CommandCategory::Settings,
            "Turn voice control off",
        )
        .with_pattern("stop listening")
        .with_pattern("stop voice")
        .with_pattern("voice off")
        .with_example("stop listening"),
        Command::new(
            "mute_sounds",
            "settings.sounds_off",
            CommandCategory::Settings,
            "Mute sound effects",
        )
        .with_pattern("mute sounds")
        .with_pattern("turn off sounds")
        .with_pattern("silence sounds")
        .with_example("mute sounds"),
    ]
}
