//! Register and CSR name tables.
//!
//! Every rendering keeps the raw number next to the symbolic name
//! (`a0(x10)`, `mstatus (csr 300)`), so an index missing from a table
//! still prints something useful.

/// Integer register ABI names, indexed by `x<N>`.
pub const REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2",
    "s0/fp", "s1", "a0", "a1", "a2", "a3", "a4", "a5",
    "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7",
    "s8", "s9", "s10", "s11", "t3", "t4", "t5", "t6",
];

/// Floating-point register ABI names, indexed by `f<N>`.
pub const FREG_NAMES: [&str; 32] = [
    "ft0", "ft1", "ft2", "ft3", "ft4", "ft5", "ft6", "ft7",
    "fs0", "fs1", "fa0", "fa1", "fa2", "fa3", "fa4", "fa5",
    "fa6", "fa7", "fs2", "fs3", "fs4", "fs5", "fs6", "fs7",
    "fs8", "fs9", "fs10", "fs11", "ft8", "ft9", "ft10", "ft11",
];

const UNKNOWN: &str = "<UNKNOWN>";

/// `name(x<N>)` for an integer register index.
pub fn reg_name(index: u32) -> String {
    let name = REG_NAMES.get(index as usize).copied().unwrap_or(UNKNOWN);
    format!("{name}(x{index})")
}

/// Compressed 3-bit register field `r'`, which names `x8..x15`.
pub fn rprime_name(index: u32) -> String {
    reg_name(index + 8)
}

/// `name(f<N>)` for a floating-point register index.
pub fn freg_name(index: u32) -> String {
    let name = FREG_NAMES.get(index as usize).copied().unwrap_or(UNKNOWN);
    format!("{name}(f{index})")
}

/// Compressed 3-bit FP register field, naming `f8..f15`.
pub fn fprime_name(index: u32) -> String {
    freg_name(index + 8)
}

/// Single CSRs, sorted by address.
const CSR_NAMES: &[(u16, &str)] = &[
    (0x000, "ustatus"),
    (0x001, "fflags"),
    (0x002, "frm"),
    (0x003, "fcsr"),
    (0x004, "uie"),
    (0x005, "utvec"),
    (0x040, "uscratch"),
    (0x041, "uepc"),
    (0x042, "ucause"),
    (0x043, "utval"),
    (0x044, "uip"),
    (0x100, "sstatus"),
    (0x102, "sedeleg"),
    (0x103, "sideleg"),
    (0x104, "sie"),
    (0x105, "stvec"),
    (0x106, "scounteren"),
    (0x140, "sscratch"),
    (0x141, "sepc"),
    (0x142, "scause"),
    (0x143, "stval"),
    (0x144, "sip"),
    (0x180, "satp"),
    (0x200, "bsstatus"),
    (0x204, "bsie"),
    (0x205, "bstvec"),
    (0x240, "bsscratch"),
    (0x241, "bsepc"),
    (0x242, "bscause"),
    (0x243, "bstval"),
    (0x244, "bsip"),
    (0x280, "bsatp"),
    (0x300, "mstatus"),
    (0x301, "misa"),
    (0x302, "medeleg"),
    (0x303, "mideleg"),
    (0x304, "mie"),
    (0x305, "mtvec"),
    (0x306, "mcounteren"),
    (0x320, "mcountinhibit"),
    (0x340, "mscratch"),
    (0x341, "mepc"),
    (0x342, "mcause"),
    (0x343, "mtval"),
    (0x344, "mip"),
    (0x7A0, "tselect"),
    (0x7A1, "tdata1"),
    (0x7A2, "tdata2"),
    (0x7A3, "tdata3"),
    (0x7B0, "dcsr"),
    (0x7B1, "dpc"),
    (0x7B2, "dscratch0"),
    (0x7B3, "dscratch1"),
    (0xA00, "hstatus"),
    (0xA02, "hedeleg"),
    (0xA03, "hideleg"),
    (0xA80, "hgatp"),
    (0xB00, "mcycle"),
    (0xB02, "minstret"),
    (0xB80, "mcycleh"),
    (0xB82, "minstreth"),
    (0xC00, "cycle"),
    (0xC01, "time"),
    (0xC02, "instret"),
    (0xC80, "cycleh"),
    (0xC81, "timeh"),
    (0xC82, "instreth"),
    (0xF11, "mvendorid"),
    (0xF12, "marchid"),
    (0xF13, "mimpid"),
    (0xF14, "mhartid"),
];

/// A run of numbered CSRs: `base + n` is named `{prefix}{n}{suffix}`
/// for `n` in `first..=last`.
#[derive(Debug, Clone, Copy)]
struct CsrFamily {
    base: u16,
    first: u16,
    last: u16,
    prefix: &'static str,
    suffix: &'static str,
}

const CSR_FAMILIES: &[CsrFamily] = &[
    CsrFamily { base: 0x320, first: 3, last: 31, prefix: "mhpmevent", suffix: "" },
    CsrFamily { base: 0x3A0, first: 0, last: 3, prefix: "pmpcfg", suffix: "" },
    CsrFamily { base: 0x3B0, first: 0, last: 15, prefix: "pmpaddr", suffix: "" },
    CsrFamily { base: 0xB00, first: 3, last: 31, prefix: "mhpmcounter", suffix: "" },
    CsrFamily { base: 0xB80, first: 3, last: 31, prefix: "mhpmcounter", suffix: "h" },
    CsrFamily { base: 0xC00, first: 3, last: 31, prefix: "hpmcounter", suffix: "" },
    CsrFamily { base: 0xC80, first: 3, last: 31, prefix: "hpmcounter", suffix: "h" },
];

/// Symbolic name of a CSR address, if the tables know it.
pub fn csr_symbol(addr: u32) -> Option<String> {
    let addr = u16::try_from(addr).ok()?;
    if let Ok(i) = CSR_NAMES.binary_search_by_key(&addr, |&(a, _)| a) {
        return Some(CSR_NAMES[i].1.to_string());
    }
    CSR_FAMILIES.iter().find_map(|fam| {
        let n = addr.checked_sub(fam.base)?;
        (fam.first..=fam.last)
            .contains(&n)
            .then(|| format!("{}{}{}", fam.prefix, n, fam.suffix))
    })
}

/// `name (csr <hex>)`, or `(csr <hex>)` when the address is unnamed.
pub fn csr_name(addr: u32) -> String {
    match csr_symbol(addr) {
        Some(name) => format!("{name} (csr {addr:x})"),
        None => format!("(csr {addr:x})"),
    }
}
