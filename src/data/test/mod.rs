mod counter;
mod guild_setting;
mod seen_event;
mod tracked_state;
