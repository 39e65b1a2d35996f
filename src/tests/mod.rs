mod notes_delete;
mod notes_update;
