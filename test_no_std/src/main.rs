//! Building this module successfully guarantees that the library is no-std compatible

#![no_std]
#![no_main]

use core::panic::PanicInfo;

use flattraj::{trajectory, FlatTrajectory};

#[panic_handler]
fn panic(_info: &PanicInfo) -> ! {
    // We can't print, so there's not much to do here
    loop {}
}

#[no_mangle]
pub fn _start() -> ! {
    let start = [0.0_f64, 1.0];
    let end = [1.0_f64, 0.0];
    let times = [0.0, 0.5, 1.0];

    let mut out = [0.0; 6];

    trajectory::trajectory(&start, &end, 6, 1.0, &times, &mut out).unwrap();
    trajectory::derivative(&start, &end, 6, 2, 1.0, &times, &mut out).unwrap();

    let traj: FlatTrajectory<f64, 2> = FlatTrajectory::new(&start, &end, 3, 1.0).unwrap();
    let mut state = [0.0; 8];
    traj.eval_state(0.25, &mut state).unwrap();

    loop {} // We don't actually run this, just compile it
}
