//!
//! International phone masks.
//!
//! Country code as literals, `#` for the digits of the subscriber number.
//! Used by [MaskConfig::phone](crate::MaskConfig::phone).
//!

/// Phone masks.
pub static PHONE_MASKS: &[&str] = &[
    "+1 (###) ###-####",
    "+7 (###) ###-##-##",
    "+20 ## #### ####",
    "+27 ## ### ####",
    "+30 ### ### ####",
    "+31 ## ### ####",
    "+32 ### ## ## ##",
    "+33 # ## ## ## ##",
    "+34 ### ### ###",
    "+36 ## ### ####",
    "+39 ### ### ####",
    "+40 ### ### ###",
    "+41 ## ### ## ##",
    "+43 ### ######",
    "+44 #### ######",
    "+45 ## ## ## ##",
    "+46 ##-### ## ##",
    "+47 ### ## ###",
    "+48 ### ### ###",
    "+49 ### ########",
    "+51 ### ### ###",
    "+52 ## #### ####",
    "+54 ## ####-####",
    "+55 (##) #####-####",
    "+56 # #### ####",
    "+57 ### ### ####",
    "+60 ##-### ####",
    "+61 # #### ####",
    "+62 ###-###-####",
    "+63 ### ### ####",
    "+64 ## ### ####",
    "+65 #### ####",
    "+66 ## ### ####",
    "+81 ##-####-####",
    "+82 ##-####-####",
    "+84 ## #### ####",
    "+86 ### #### ####",
    "+90 (###) ### ## ##",
    "+91 #####-#####",
    "+92 ### #######",
    "+94 ## ### ####",
    "+98 ### ### ####",
    "+212 ###-######",
    "+213 ### ## ## ##",
    "+234 ### ### ####",
    "+254 ### ######",
    "+351 ### ### ###",
    "+352 ### ### ###",
    "+353 ## ### ####",
    "+354 ### ####",
    "+358 ## ### ####",
    "+359 ## ### ####",
    "+370 ### #####",
    "+371 ## ### ###",
    "+372 #### ####",
    "+373 #### ####",
    "+374 ## ######",
    "+375 (##) ###-##-##",
    "+380 (##) ###-##-##",
    "+381 ## #######",
    "+385 ## ### ####",
    "+386 ## ### ###",
    "+387 ## ###-###",
    "+420 ### ### ###",
    "+421 ### ### ###",
    "+852 #### ####",
    "+886 ### ### ###",
    "+971 ## ### ####",
    "+972 ##-###-####",
    "+994 ## ### ## ##",
    "+995 ### ## ## ##",
    "+998 ## ### ## ##",
];
