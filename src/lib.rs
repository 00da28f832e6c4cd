mod debug;

pub mod command;
pub mod io;
pub mod shared;
pub mod stack;
pub mod terminal_io;

pub use self::command::{Command, ParseCommandError, ScriptError};
pub use self::io::{OverflowPolicy, SessionIo};
pub use self::shared::SharedStack;
pub use self::stack::{BoundedStack, StackError, EMPTY_SENTINEL};

/// Runs commands against a `BoundedStack`, reporting each outcome to the io.
#[derive(Debug)]
pub struct Session<'a> {
    stack: BoundedStack,
    policy: OverflowPolicy,
    io: &'a mut dyn SessionIo,
}

impl<'a> Session<'a> {
    pub fn new(capacity: usize, policy: OverflowPolicy, io: &'a mut dyn SessionIo) -> Self {
        Self::with_stack(BoundedStack::new(capacity), policy, io)
    }

    /// Run against an existing stack, e.g. one made with `BoundedStack::try_new`.
    pub fn with_stack(
        stack: BoundedStack,
        policy: OverflowPolicy,
        io: &'a mut dyn SessionIo,
    ) -> Self {
        Self { stack, policy, io }
    }

    pub fn stack(&self) -> &BoundedStack {
        &self.stack
    }

    pub fn run(&mut self, commands: impl IntoIterator<Item = Command>) {
        for cmd in commands {
            self.step(cmd);
        }
    }

    pub fn step(&mut self, cmd: Command) {
        match cmd {
            Command::Push(value) => match (self.stack.try_push(value), self.policy) {
                (Err(_), OverflowPolicy::Reject) => {
                    self.io.push_rejected(value, self.stack.capacity())
                }
                _ => self.io.pushed(value),
            },
            Command::Pop => {
                let value = self.stack.pop();
                self.io.popped(value);
            }
            Command::Peek => self.io.peeked(self.stack.peek()),
            Command::Dump => self.io.dumped(&self.stack),
        }

        self.io.update(&self.stack);
    }

    pub fn into_stack(self) -> BoundedStack {
        self.stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Recorder {
        events: Vec<String>,
        updates: usize,
    }

    impl SessionIo for Recorder {
        fn update(&mut self, _stack: &BoundedStack) {
            self.updates += 1;
        }

        fn pushed(&mut self, value: i32) {
            self.events.push(format!("pushed {value}"));
        }

        fn push_rejected(&mut self, value: i32, capacity: usize) {
            self.events.push(format!("rejected {value} ({capacity})"));
        }

        fn popped(&mut self, value: Option<i32>) {
            self.events.push(format!("popped {value:?}"));
        }

        fn peeked(&mut self, value: Option<i32>) {
            self.events.push(format!("peeked {value:?}"));
        }

        fn dumped(&mut self, stack: &BoundedStack) {
            self.events.push(format!("dumped {:?}", stack.dump().collect::<Vec<_>>()));
        }
    }

    fn script() -> Vec<Command> {
        use Command::*;
        vec![Push(5), Push(10), Push(15), Push(20), Dump, Pop, Peek, Pop, Pop, Pop]
    }

    #[test]
    fn ignore_policy_drops_silently() {
        let mut io = Recorder::default();
        let mut session = Session::new(3, OverflowPolicy::Ignore, &mut io);
        session.run(script());
        assert!(session.stack().is_empty());

        assert_eq!(
            io.events,
            [
                "pushed 5",
                "pushed 10",
                "pushed 15",
                "pushed 20",
                "dumped [15, 10, 5]",
                "popped Some(15)",
                "peeked Some(10)",
                "popped Some(10)",
                "popped Some(5)",
                "popped None",
            ]
        );
        assert_eq!(io.updates, 10);
    }

    #[test]
    fn reject_policy_reports_overflow() {
        let mut io = Recorder::default();
        let mut session = Session::new(3, OverflowPolicy::Reject, &mut io);
        session.run(script().into_iter().take(5));
        let stack = session.into_stack();
        assert_eq!(stack.len(), 3);

        assert_eq!(io.events[3], "rejected 20 (3)");
        assert_eq!(io.events[4], "dumped [15, 10, 5]");
    }

    #[test]
    fn with_stack_keeps_existing_elements() {
        let mut stack = BoundedStack::try_new(2).unwrap();
        stack.push(1);

        let mut io = Recorder::default();
        let mut session = Session::with_stack(stack, OverflowPolicy::Reject, &mut io);
        session.run([Command::Push(2), Command::Push(3), Command::Dump]);
        assert_eq!(session.stack().len(), 2);

        assert_eq!(io.events, ["pushed 2", "rejected 3 (2)", "dumped [2, 1]"]);
    }
}
