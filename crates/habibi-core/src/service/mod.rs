//! Use cases behind the three guide views.
//!
//! Services orchestrate the dispatcher, the session store, and the chat-log
//! port. They depend on traits -- never on concrete infrastructure.

pub mod guide;
