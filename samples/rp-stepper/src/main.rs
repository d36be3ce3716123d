#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_futures::yield_now;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::USB;
use embassy_rp::uart::{self, Uart};
use embassy_rp::usb::{Driver, InterruptHandler};
use embassy_time::Delay;
use irstep_embedded::{
    BoardConfig, Clock, EmbassyClock, FourPinMotor, HALF_STEP, IrSensor, MotorBoard,
    MotorController,
};
use panic_halt as _;

bind_interrupts!(struct Irqs {
    USBCTRL_IRQ => InterruptHandler<USB>;
});

#[embassy_executor::task]
async fn logger_task(driver: Driver<'static, USB>) {
    embassy_usb_logger::run!(1024, log::LevelFilter::Info, driver);
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    spawner.spawn(logger_task(Driver::new(p.USB, Irqs))).unwrap();

    let config = BoardConfig::default();
    let clock = EmbassyClock::new();

    // Coils IN1..IN4, then the IR interrupter.
    let motor1 = MotorController::new(
        "Motor 1",
        FourPinMotor::new([
            Output::new(p.PIN_15, Level::Low),
            Output::new(p.PIN_28, Level::Low),
            Output::new(p.PIN_7, Level::Low),
            Output::new(p.PIN_27, Level::Low),
        ]),
        IrSensor::new(Input::new(p.PIN_5, Pull::Up)),
        &HALF_STEP,
        clock.now_ms(),
    );
    let motor2 = MotorController::new(
        "Motor 2",
        FourPinMotor::new([
            Output::new(p.PIN_26, Level::Low),
            Output::new(p.PIN_6, Level::Low),
            Output::new(p.PIN_17, Level::Low),
            Output::new(p.PIN_16, Level::Low),
        ]),
        IrSensor::new(Input::new(p.PIN_4, Pull::Up)),
        &HALF_STEP,
        clock.now_ms(),
    );
    let motor3 = MotorController::new(
        "Motor 3",
        FourPinMotor::new([
            Output::new(p.PIN_2, Level::Low),
            Output::new(p.PIN_14, Level::Low),
            Output::new(p.PIN_13, Level::Low),
            Output::new(p.PIN_12, Level::Low),
        ]),
        IrSensor::new(Input::new(p.PIN_3, Pull::Up)),
        &HALF_STEP,
        clock.now_ms(),
    );

    let mut uart_config = uart::Config::default();
    uart_config.baudrate = config.serial_baud_rate;
    let serial = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);

    let mut board = MotorBoard::new([motor1, motor2, motor3], serial, clock, Delay, config);

    board.start();
    loop {
        if let Err(e) = board.tick() {
            log::warn!("Tick failed: {}", e);
        }
        // Gives the USB logger a chance to run between ticks.
        yield_now().await;
    }
}
