//! Backend commands queued from UI to the delivery worker.

use shared::domain::ContactMessage;

pub enum BackendCommand {
    SendContact { message: ContactMessage },
}
