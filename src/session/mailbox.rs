use std::sync::Mutex;
use std::time::Duration;

/// One-slot rendezvous cell between the engine thread and UI threads.
/// The whole record is published in a single store, so readers can never
/// observe half an update. Waiting is cooperative polling at a fixed
/// short interval; the consistency contract is "observed within one poll
/// interval", which human reaction time dwarfs.
#[derive(Debug)]
pub struct Mailbox<T> {
    slot: Mutex<Slot<T>>,
}

#[derive(Debug)]
struct Slot<T> {
    value: Option<T>,
    fresh: bool,
}

impl<T> Default for Mailbox<T> {
    fn default() -> Self {
        Self {
            slot: Mutex::new(Slot {
                value: None,
                fresh: false,
            }),
        }
    }
}

impl<T: Clone> Mailbox<T> {
    pub const POLL: Duration = Duration::from_millis(200);

    /// publish a value, replacing whatever was there
    pub fn post(&self, value: T) {
        let mut slot = self.slot.lock().expect("mailbox lock");
        slot.value = Some(value);
        slot.fresh = true;
    }

    pub fn clear(&self) {
        let mut slot = self.slot.lock().expect("mailbox lock");
        slot.value = None;
        slot.fresh = false;
    }

    /// consume the value if any, leaving the slot empty
    pub fn take(&self) -> Option<T> {
        let mut slot = self.slot.lock().expect("mailbox lock");
        slot.fresh = false;
        slot.value.take()
    }

    /// non-destructive read of whatever is currently published
    pub fn peek(&self) -> Option<T> {
        self.slot.lock().expect("mailbox lock").value.clone()
    }

    /// block until a value exists, consume it
    pub fn collect(&self) -> T {
        loop {
            match self.take() {
                Some(value) => return value,
                None => std::thread::sleep(Self::POLL),
            }
        }
    }

    /// block until any value is published, read it and mark it seen
    pub fn latest(&self) -> T {
        loop {
            {
                let mut slot = self.slot.lock().expect("mailbox lock");
                if slot.value.is_some() {
                    slot.fresh = false;
                    return slot.value.clone().expect("is_some implies present");
                }
            }
            std::thread::sleep(Self::POLL);
        }
    }

    /// block until a value newer than the last read arrives
    pub fn next(&self) -> T {
        loop {
            {
                let mut slot = self.slot.lock().expect("mailbox lock");
                if slot.fresh {
                    slot.fresh = false;
                    return slot.value.clone().expect("fresh implies present");
                }
            }
            std::thread::sleep(Self::POLL);
        }
    }
}
