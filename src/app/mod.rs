//! Application layer — the hexagonal core and its boundary types.
//!
//! | Module     | Contents                                             |
//! |------------|------------------------------------------------------|
//! | `service`  | [`SessionController`](service::SessionController)    |
//! | `ports`    | `SensorPort`, `ClockPort`, `EventSink` traits        |
//! | `commands` | Inbound [`SessionCommand`](commands::SessionCommand) |
//! | `events`   | Outbound [`AppEvent`](events::AppEvent)              |
//! | `status`   | [`StatusSnapshot`](status::StatusSnapshot) + wire JSON |

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
pub mod status;
