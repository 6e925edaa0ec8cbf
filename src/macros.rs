#![allow(unused_macros, dead_code)]
macro_rules! verbose_println {
    ($($p:expr),+) => {
        if (config::ARGS.verbose) {
            println!($($p),+);
        }
    }
}
macro_rules! info {
    ($($p:expr),+) => {
        println!(concat!(blue!("INFO"),": {}"),format_args!($($p),+))
    }
}

macro_rules! warn {
    ($($p:expr),+) => {
        println!(concat!(yellow!("WARNING"),": {}"),format_args!($($p),+))
    }
}
macro_rules! general_err {
    ($msg:expr) => {
        crate::Error::new(crate::ErrorKind::General, None, format!("{}", $msg).as_str())
    };
}
macro_rules! missing_resource_err {
    ($path:expr, $msg:expr) => {
        crate::Error::new(
            crate::ErrorKind::MissingResource,
            None,
            format!("{} {}: {}", red!("Missing Resource"), $path, $msg).as_str(),
        )
    };
}
macro_rules! malformed_err {
    ($($msg:expr),+) => {
        crate::Error::new(
            crate::ErrorKind::MalformedRecord,
            None,
            format!("{} {}", red!("Malformed Record"), format!($($msg),+)).as_str(),
        )
    };
}
macro_rules! malformed_err_op {
    ($key:expr, $($msg:expr),+) => {
        crate::Error::new(
            crate::ErrorKind::MalformedRecord,
            Some($key),
            format!("{} {}", red!("Malformed Record"), format!($($msg),+)).as_str(),
        )
    };
}
macro_rules! unrecognized_err {
    ($key:expr, $name:expr) => {
        crate::Error::new(
            crate::ErrorKind::UnrecognizedOperand,
            Some($key),
            format!("{} operand name {:?}", red!("Unrecognized Operand"), $name).as_str(),
        )
    };
}
macro_rules! color {
    ($color: literal, $msg: expr) => {
        concat!("\x1b[", $color, "m", $msg, "\x1b[0m")
    };
}
macro_rules! red {
    ($msg:expr) => {
        color!(91, $msg)
    };
}
macro_rules! green {
    ($msg:expr) => {
        color!(92, $msg)
    };
}
macro_rules! yellow {
    ($msg:expr) => {
        color!(93, $msg)
    };
}
macro_rules! blue {
    ($msg:expr) => {
        color!(94, $msg)
    };
}
