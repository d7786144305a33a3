//! Listening-socket bootstrap: bind, accept, one task per connection.

pub mod listener;
