use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;
use embedded_hal_nb::nb::{self, block};
use embedded_hal_nb::serial::{Error as _, Read, Write};

use crate::config::BoardConfig;
use crate::control::MotorController;
use crate::error::{Error, Result};
use crate::protocol::{Command, CommandBuffer, MOTOR_COUNT, StatusSnapshot};
use crate::stepper::{Direction, Motor};
use crate::time::Clock;

fn write_all<S>(serial: &mut S, buffer: &[u8]) -> Result<()>
where
    S: Write<u8>,
{
    for &byte in buffer {
        block!(serial.write(byte)).map_err(Error::serial)?;
    }
    block!(serial.flush()).map_err(Error::serial)?;
    Ok(())
}

/// Application context: the motors, the host link and the cooperative loop
/// that services them.
pub struct MotorBoard<'a, M, P, S, C, D>
where
    M: Motor,
    P: InputPin,
    S: Read<u8> + Write<u8>,
    C: Clock,
    D: DelayNs,
{
    motors: [MotorController<'a, M, P>; MOTOR_COUNT],
    serial: S,
    clock: C,
    delay: D,
    config: BoardConfig,
    buffer: CommandBuffer,
    last_status_time: u64,
}

impl<'a, M, P, S, C, D> MotorBoard<'a, M, P, S, C, D>
where
    M: Motor,
    P: InputPin,
    S: Read<u8> + Write<u8>,
    C: Clock,
    D: DelayNs,
{
    pub fn new(
        motors: [MotorController<'a, M, P>; MOTOR_COUNT],
        serial: S,
        clock: C,
        delay: D,
        config: BoardConfig,
    ) -> Self {
        let last_status_time = clock.now_ms();
        let buffer = CommandBuffer::new(config.command_capacity);

        Self {
            motors,
            serial,
            clock,
            delay,
            config,
            buffer,
            last_status_time,
        }
    }

    /// Announces readiness and restarts the status interval.
    pub fn start(&mut self) {
        log::info!("Motor control with UART ready.");
        log::info!("Waiting for commands from host...");
        self.last_status_time = self.clock.now_ms();
    }

    /// Runs the scheduler forever. Errors of one tick are logged and the loop continues.
    pub fn run(&mut self) -> ! {
        self.start();
        loop {
            if let Err(e) = self.tick() {
                log::warn!("Tick failed: {}", e);
            }
        }
    }

    /// One scheduler pass: drain the serial input, update every motor once in
    /// order, then report status if the interval has elapsed.
    ///
    /// A failing motor does not keep the others or the status line from running;
    /// the first error of the pass is returned once the pass is complete.
    pub fn tick(&mut self) -> Result<()> {
        self.poll_serial();

        let mut result = Ok(());
        for motor in self.motors.iter_mut() {
            let updated = motor.update(&self.clock, &mut self.delay, self.config.motor_speed_ms);
            if let Err(e) = updated {
                log::debug!("{}: update failed: {}", motor.name(), e);
                result = result.and(Err(e));
            }
        }

        if self.clock.elapsed_since(self.last_status_time) >= self.config.status_interval_ms {
            self.last_status_time = self.clock.now_ms();
            result = result.and(self.send_status());
        }

        result
    }

    fn poll_serial(&mut self) {
        loop {
            let byte = match self.serial.read() {
                Ok(byte) => byte,
                Err(nb::Error::WouldBlock) => break,
                Err(nb::Error::Other(e)) => {
                    log::debug!("Serial read failed: {:?}", e.kind());
                    break;
                }
            };

            let command = match self.buffer.push_byte(byte) {
                Ok(Some(line)) => {
                    log::debug!("Received command: {}", line);
                    Some(Command::parse(line))
                }
                Ok(None) => None,
                Err(e) => {
                    log::warn!("{}, discarding line", e);
                    None
                }
            };

            if let Some(command) = command {
                self.buffer.clear();
                self.dispatch(command);
            }
        }
    }

    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::SetTargets(targets) => {
                for (motor, target) in self.motors.iter_mut().zip(targets) {
                    motor.set_task(u32::from(target), Direction::Clockwise);
                }
            }
            Command::StopAll => {
                log::info!("Stopping all motors.");
                for motor in self.motors.iter_mut() {
                    motor.stop();
                }
            }
            Command::Unrecognized => log::debug!("Ignoring unrecognized command"),
        }
    }

    pub fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot::new(core::array::from_fn(|i| self.motors[i].is_running()))
    }

    pub fn send_status(&mut self) -> Result<()> {
        let line = self.snapshot().to_line();
        log::trace!("Sending {}", line.trim_end());
        write_all(&mut self.serial, line.as_bytes())
    }

    pub fn motors(&self) -> &[MotorController<'a, M, P>; MOTOR_COUNT] {
        &self.motors
    }

}
