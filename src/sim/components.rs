/// Player intent for one tic, already resolved from whatever input device.
///
/// Values are fractions of the configured step; `1.0` is a full step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputCmd {
    pub forward: f64, // –1 … +1  (back / forward)
    pub strafe: f64,  // –1 … +1  (left / right)
    pub turn: f64,    // –1 … +1  (left / right)
}

impl InputCmd {
    pub fn forward(amount: f64) -> Self {
        Self {
            forward: amount,
            ..Self::default()
        }
    }

    pub fn turn(amount: f64) -> Self {
        Self {
            turn: amount,
            ..Self::default()
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.forward == 0.0 && self.strafe == 0.0 && self.turn == 0.0
    }
}
