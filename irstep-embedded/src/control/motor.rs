use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::{
    Result,
    sensor::IrSensor,
    stepper::{Direction, Motor, STEPS_PER_CYCLE, StepSequence},
    time::Clock,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MotorState {
    #[default]
    Idle,
    Running,
}

/// One stepper with its rotation counter.
///
/// A task runs the motor until the IR interrupter has reported `target_count`
/// confirmed falling edges. All work is done in [`MotorController::update`],
/// which never waits except for the sensor debounce.
pub struct MotorController<'a, M, P>
where
    M: Motor,
    P: InputPin,
{
    name: &'static str,
    motor: M,
    sensor: IrSensor<P>,
    sequence: &'a StepSequence,
    is_running: bool,
    direction: Direction,
    step_index: usize,
    target_count: u32,
    current_count: u32,
    last_step_time: u64,
}

impl<'a, M, P> MotorController<'a, M, P>
where
    M: Motor,
    P: InputPin,
{
    pub fn new(
        name: &'static str,
        motor: M,
        sensor: IrSensor<P>,
        sequence: &'a StepSequence,
        now_ms: u64,
    ) -> Self {
        let mut controller = Self {
            name,
            motor,
            sensor,
            sequence,
            is_running: false,
            direction: Direction::Stop,
            step_index: 0,
            target_count: 0,
            current_count: 0,
            last_step_time: now_ms,
        };
        controller.stop();
        controller
    }

    /// Starts counting `count` edges in `direction`. A zero count stops the motor.
    pub fn set_task(&mut self, count: u32, direction: Direction) {
        self.target_count = count;
        self.current_count = 0;
        self.direction = direction;
        self.sensor.reset();

        if self.target_count > 0 {
            self.is_running = true;
            log::info!(
                "{}: Starting task (Count={}, Dir={})",
                self.name,
                self.target_count,
                self.direction
            );
        } else {
            self.stop();
        }
    }

    pub fn stop(&mut self) {
        self.is_running = false;
        self.direction = Direction::Stop;
        self.target_count = 0;
        self.current_count = 0;
        self.motor.release();
    }

    /// Advances the motor by at most one step.
    pub fn update<C, D>(&mut self, clock: &C, delay: &mut D, step_interval_ms: u64) -> Result<()>
    where
        C: Clock,
        D: DelayNs,
    {
        if self.is_running && self.sensor.poll_falling_edge(delay)? {
            self.current_count += 1;
            log::info!(
                "{}: Detected {}/{}",
                self.name,
                self.current_count,
                self.target_count
            );
        }

        if !self.is_running {
            self.motor.release();
            return Ok(());
        }

        if self.current_count >= self.target_count {
            log::info!("{}: Task finished.", self.name);
            self.stop();
            return Ok(());
        }

        if clock.elapsed_since(self.last_step_time) < step_interval_ms {
            return Ok(());
        }
        self.last_step_time = clock.now_ms();

        let pattern = self.sequence.pattern(self.direction, self.step_index);
        self.motor.energize(pattern);
        self.step_index = (self.step_index + 1) % STEPS_PER_CYCLE;

        Ok(())
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn state(&self) -> MotorState {
        if self.is_running {
            MotorState::Running
        } else {
            MotorState::Idle
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    pub fn target_count(&self) -> u32 {
        self.target_count
    }

    pub fn current_count(&self) -> u32 {
        self.current_count
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use crate::stepper::{Motor, StepPattern};
    use crate::time::Clock;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum CoilEvent {
        Energize(StepPattern),
        Release,
    }

    /// Records every coil change.
    #[derive(Clone, Default)]
    pub struct MockMotor {
        events: Rc<RefCell<Vec<CoilEvent>>>,
    }

    impl MockMotor {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn events(&self) -> Vec<CoilEvent> {
            self.events.borrow().clone()
        }

        pub fn steps(&self) -> Vec<StepPattern> {
            self.events
                .borrow()
                .iter()
                .filter_map(|event| match event {
                    CoilEvent::Energize(pattern) => Some(*pattern),
                    CoilEvent::Release => None,
                })
                .collect()
        }

        pub fn last_event(&self) -> Option<CoilEvent> {
            self.events.borrow().last().copied()
        }

        pub fn clear(&self) {
            self.events.borrow_mut().clear();
        }
    }

    impl Motor for MockMotor {
        fn energize(&mut self, pattern: StepPattern) {
            self.events.borrow_mut().push(CoilEvent::Energize(pattern));
        }

        fn release(&mut self) {
            self.events.borrow_mut().push(CoilEvent::Release);
        }
    }

    #[derive(Clone, Default)]
    pub struct MockClock {
        now: Rc<Cell<u64>>,
    }

    impl MockClock {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set(&self, ms: u64) {
            self.now.set(ms);
        }

        pub fn advance(&self, ms: u64) {
            self.now.set(self.now.get() + ms);
        }
    }

    impl Clock for MockClock {
        fn now_ms(&self) -> u64 {
            self.now.get()
        }
    }
}
