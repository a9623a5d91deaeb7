use super::rule_primitives::{
    exceeds, form_factor_conflict, generation_unlisted, is_air_cooler, ram_conflict,
    socket_conflict,
};
use crate::build_configuration::domain::{
    BuildCategory, CompatibilityIssue, Component, ComponentLookup, Selection, Severity,
};
use crate::build_configuration::policies::PowerBudget;

/// Selected components resolved once per evaluation
struct ResolvedBuild<'a> {
    case: Option<&'a Component>,
    motherboard: Option<&'a Component>,
    cpu: Option<&'a Component>,
    ram: Option<&'a Component>,
    gpu: Option<&'a Component>,
    psu: Option<&'a Component>,
    cooling: Option<&'a Component>,
}

impl<'a> ResolvedBuild<'a> {
    fn resolve<L: ComponentLookup + ?Sized>(selection: &Selection, lookup: &'a L) -> Self {
        let get = move |category: BuildCategory| {
            selection
                .get(category)
                .and_then(|id| lookup.lookup(category, id))
        };
        Self {
            case: get(BuildCategory::Case),
            motherboard: get(BuildCategory::Motherboard),
            cpu: get(BuildCategory::Cpu),
            ram: get(BuildCategory::Ram),
            gpu: get(BuildCategory::Gpu),
            psu: get(BuildCategory::Psu),
            cooling: get(BuildCategory::Cooling),
        }
    }
}

type Rule = fn(&ResolvedBuild<'_>) -> Option<CompatibilityIssue>;

/// Evaluation order of the pairwise rules
const RULES: [Rule; 9] = [
    socket_match,
    generation_support,
    ram_type_support,
    form_factor_fit,
    gpu_clearance,
    psu_sizing,
    cooler_height_clearance,
    cooler_thermal_capacity,
    psu_length_fit,
];

/// CompatibilityEvaluator service for checking a selection against the rule set
///
/// Each rule inspects a pair (or, for PSU sizing, a triple) of selected components and
/// yields at most one issue. A rule stays silent when a component is unselected, its id
/// does not resolve, or a compared field is missing.
pub struct CompatibilityEvaluator;

impl CompatibilityEvaluator {
    /// Evaluates all rules in order against the current selection
    ///
    /// # Arguments
    /// * `selection` - Build slot → component id mapping
    /// * `lookup` - Resolves selected ids to components
    ///
    /// # Returns
    /// Issues in rule order. Identical inputs always produce identical output.
    pub fn evaluate<L: ComponentLookup + ?Sized>(
        selection: &Selection,
        lookup: &L,
    ) -> Vec<CompatibilityIssue> {
        let build = ResolvedBuild::resolve(selection, lookup);
        RULES.iter().filter_map(|rule| rule(&build)).collect()
    }
}

fn names(components: &[&Component]) -> Vec<String> {
    components
        .iter()
        .map(|c| c.display_name().to_string())
        .collect()
}

fn socket_match(build: &ResolvedBuild<'_>) -> Option<CompatibilityIssue> {
    let (cpu, board) = (build.cpu?, build.motherboard?);
    let cpu_socket = cpu.as_cpu()?.socket.as_deref();
    let board_socket = board.as_motherboard()?.socket.as_deref();
    if !socket_conflict(cpu_socket, board_socket) {
        return None;
    }
    let (cpu_socket, board_socket) = (cpu_socket?, board_socket?);

    Some(CompatibilityIssue::new(
        Severity::Critical,
        "CPU Socket Mismatch",
        format!(
            "{} uses the {} socket, but {} has a {} socket.",
            cpu.display_name(),
            cpu_socket,
            board.display_name(),
            board_socket
        ),
        format!(
            "Choose a motherboard with a {} socket, or a CPU designed for {}.",
            cpu_socket, board_socket
        ),
        names(&[cpu, board]),
    ))
}

fn generation_support(build: &ResolvedBuild<'_>) -> Option<CompatibilityIssue> {
    let (cpu, board) = (build.cpu?, build.motherboard?);
    let generation = cpu.as_cpu()?.generation.as_deref();
    let supported = board.as_motherboard()?.supported_generations.as_deref();
    if !generation_unlisted(supported, generation) {
        return None;
    }

    Some(CompatibilityIssue::new(
        Severity::Warning,
        "CPU Generation May Need BIOS Update",
        format!(
            "{} does not list {} processors as supported out of the box, so {} may need a BIOS update first.",
            board.display_name(),
            generation?,
            cpu.display_name()
        ),
        "Check that the board ships with a compatible BIOS or supports BIOS flashback before installing the CPU.",
        names(&[cpu, board]),
    ))
}

fn ram_type_support(build: &ResolvedBuild<'_>) -> Option<CompatibilityIssue> {
    let (ram, board) = (build.ram?, build.motherboard?);
    let ram_types = &ram.as_ram()?.ram_types;
    let board_support = &board.as_motherboard()?.ram_support;
    if !ram_conflict(ram_types, board_support) {
        return None;
    }

    Some(CompatibilityIssue::new(
        Severity::Critical,
        "Memory Type Not Supported",
        format!(
            "{} is {} memory, but {} supports {}.",
            ram.display_name(),
            ram_types.join("/"),
            board.display_name(),
            board_support.join(", ")
        ),
        format!(
            "Pick {} memory for this motherboard, or a motherboard that supports {}.",
            board_support.join("/"),
            ram_types.join("/")
        ),
        names(&[ram, board]),
    ))
}

fn form_factor_fit(build: &ResolvedBuild<'_>) -> Option<CompatibilityIssue> {
    let (board, case) = (build.motherboard?, build.case?);
    let form_factor = board.as_motherboard()?.form_factor.as_deref();
    let supported = &case.as_case()?.supported_form_factors;
    if !form_factor_conflict(supported, form_factor) {
        return None;
    }
    let form_factor = form_factor?;

    Some(CompatibilityIssue::new(
        Severity::Critical,
        "Motherboard Does Not Fit Case",
        format!(
            "{} is {}, but {} supports {}.",
            board.display_name(),
            form_factor,
            case.display_name(),
            supported.join(", ")
        ),
        format!(
            "Choose a case that supports {} motherboards, or a motherboard in a form factor this case accepts.",
            form_factor
        ),
        names(&[board, case]),
    ))
}

fn gpu_clearance(build: &ResolvedBuild<'_>) -> Option<CompatibilityIssue> {
    let (gpu, case) = (build.gpu?, build.case?);
    let length = gpu.as_gpu()?.length;
    let max_length = case.as_case()?.max_gpu_length;
    if !exceeds(length, max_length) {
        return None;
    }
    let (length, max_length) = (length?, max_length?);

    Some(CompatibilityIssue::new(
        Severity::Critical,
        "Graphics Card Too Long",
        format!(
            "{} is {}mm long, but {} fits graphics cards up to {}mm.",
            gpu.display_name(),
            length,
            case.display_name(),
            max_length
        ),
        format!(
            "Choose a case with at least {}mm of GPU clearance, or a shorter graphics card.",
            length
        ),
        names(&[gpu, case]),
    ))
}

fn psu_sizing(build: &ResolvedBuild<'_>) -> Option<CompatibilityIssue> {
    let (cpu, gpu, psu) = (build.cpu?, build.gpu?, build.psu?);
    let wattage = psu.as_psu()?.wattage?;
    let estimated = PowerBudget::estimated_draw(
        cpu.as_cpu().and_then(|c| c.tdp),
        gpu.as_gpu().and_then(|g| g.power),
    );
    let recommended = PowerBudget::recommended_wattage(estimated);
    if wattage >= recommended {
        return None;
    }

    Some(CompatibilityIssue::new(
        Severity::Warning,
        "Power Supply May Be Underpowered",
        format!(
            "Estimated system draw with {} and {} is {}W. {} is rated at {}W, below the recommended {}W.",
            cpu.display_name(),
            gpu.display_name(),
            estimated,
            psu.display_name(),
            wattage,
            recommended
        ),
        format!(
            "Choose a power supply of at least {}W to leave headroom for load spikes.",
            recommended
        ),
        names(&[cpu, gpu, psu]),
    ))
}

fn cooler_height_clearance(build: &ResolvedBuild<'_>) -> Option<CompatibilityIssue> {
    let (cooler, case) = (build.cooling?, build.case?);
    let cooling = cooler.as_cooling()?;
    if !is_air_cooler(cooling.cooler_type.as_deref()) {
        return None;
    }
    let max_height = case.as_case()?.max_cpu_cooler_height;
    if !exceeds(cooling.height, max_height) {
        return None;
    }
    let (height, max_height) = (cooling.height?, max_height?);

    Some(CompatibilityIssue::new(
        Severity::Critical,
        "CPU Cooler Too Tall",
        format!(
            "{} is {}mm tall, but {} has {}mm of CPU cooler clearance.",
            cooler.display_name(),
            height,
            case.display_name(),
            max_height
        ),
        format!(
            "Choose an air cooler under {}mm, a liquid cooler, or a case with more clearance.",
            max_height
        ),
        names(&[cooler, case]),
    ))
}

fn cooler_thermal_capacity(build: &ResolvedBuild<'_>) -> Option<CompatibilityIssue> {
    let (cpu, cooler) = (build.cpu?, build.cooling?);
    let tdp = cpu.as_cpu()?.tdp;
    let capacity = cooler.as_cooling()?.tdp_support;
    if !exceeds(tdp, capacity) {
        return None;
    }
    let (tdp, capacity) = (tdp?, capacity?);

    Some(CompatibilityIssue::new(
        Severity::Warning,
        "Cooler Thermal Capacity",
        format!(
            "{} has a TDP of {}W, above the {}W rated capacity of {}.",
            cpu.display_name(),
            tdp,
            capacity,
            cooler.display_name()
        ),
        format!(
            "Choose a cooler rated for at least {}W to avoid thermal throttling.",
            tdp
        ),
        names(&[cpu, cooler]),
    ))
}

fn psu_length_fit(build: &ResolvedBuild<'_>) -> Option<CompatibilityIssue> {
    let (psu, case) = (build.psu?, build.case?);
    let length = psu.as_psu()?.length;
    let max_length = case.as_case()?.max_psu_length;
    if !exceeds(length, max_length) {
        return None;
    }
    let (length, max_length) = (length?, max_length?);

    Some(CompatibilityIssue::new(
        Severity::Critical,
        "Power Supply Too Long",
        format!(
            "{} is {}mm long, but {} fits power supplies up to {}mm.",
            psu.display_name(),
            length,
            case.display_name(),
            max_length
        ),
        "Choose a shorter power supply or a case with more PSU clearance.",
        names(&[psu, case]),
    ))
}
