//! CTF test traces
//!
//! Every entry except [`CtfTestTrace::TraceExperiment`] is a CTF trace
//! directory (a `metadata` file plus its streams). Sizes and kernel versions
//! are given for orientation only.

use super::{trace_suite, TraceEntry};

const LTTNG_MODULES_2_0: &str = "lttng-modules 2.0.0";
const LTTNG_MODULES_2_1: &str = "lttng-modules 2.1.0";
const LTTNG_MODULES_2_4: &str = "lttng-modules 2.4.0";
const LTTNG_UST_2_3: &str = "lttng-ust 2.3";
const LTTNG_KERNEL_2_5: &str = "lttng-kernel 2.5";
const BABELTRACE_WRITER: &str = "Babeltrace CTF writer (as lttng-ust 2.8)";
const SCORE_P: &str = "Score-P 7.1";

trace_suite! {
    /// Bundled test traces for the CTF parser
    pub enum CtfTestTrace in Ctf => CTF_TRACES {
        /// Example kernel trace. 13 MB, kernel 3.0.0-16-generic-pae.
        Kernel =>
            TraceEntry::single("KERNEL", "/kernel", 695_319, 10)
                .traced_by(LTTNG_MODULES_2_0),

        /// Another kernel trace. 14 MB, kernel 3.2.0-18-generic.
        Trace2 =>
            TraceEntry::single("TRACE2", "/trace2", 595_641, 11)
                .traced_by(LTTNG_MODULES_2_0),

        /// Kernel trace with pid, ppid, tid, procname and perf page fault
        /// contexts. 56 MB, kernel 3.8.1.
        KernelVm =>
            TraceEntry::single("KERNEL_VM", "/kernel_vm", 714_484, 29)
                .traced_by(LTTNG_MODULES_2_1),

        /// All kernel events, including the `inet_sock_local_*` TCP events.
        /// Pairs with [`CtfTestTrace::SyncDest`] for trace synchronization.
        SyncSrc =>
            TraceEntry::single("SYNC_SRC", "/synctraces/scp_src", 110_771, 23)
                .traced_by(LTTNG_MODULES_2_1),

        /// Other half of [`CtfTestTrace::SyncSrc`].
        SyncDest =>
            TraceEntry::single("SYNC_DEST", "/synctraces/scp_dest", 85_729, 17)
                .traced_by(LTTNG_MODULES_2_1),

        /// Django benchmark client host. Synchronizes with
        /// [`CtfTestTrace::DjangoDb`] and [`CtfTestTrace::DjangoHttpd`].
        DjangoClient =>
            TraceEntry::single("DJANGO_CLIENT", "/django-benchmark/django-client", 754_787, 15)
                .traced_by(LTTNG_MODULES_2_4),

        /// Django benchmark database host.
        DjangoDb =>
            TraceEntry::single("DJANGO_DB", "/django-benchmark/django-db", 692_098, 14)
                .traced_by(LTTNG_MODULES_2_4),

        /// Django benchmark HTTP server host.
        DjangoHttpd =>
            TraceEntry::single("DJANGO_HTTPD", "/django-benchmark/django-httpd", 779_096, 13)
                .traced_by(LTTNG_MODULES_2_4),

        /// UST trace with 967 700 lost events out of 1 000 000. Lasts 279 ms.
        HelloLost =>
            TraceEntry::single("HELLO_LOST", "/hello-lost", 1_000_000, 0)
                .traced_by(LTTNG_UST_2_3),

        /// `lttng-ust-cyg-profile` function entry/exit events.
        CygProfile =>
            TraceEntry::single("CYG_PROFILE", "/cyg-profile/glxgears-cyg-profile", 4_977, 10)
                .traced_by(LTTNG_UST_2_3),

        /// `lttng-ust-cyg-profile-fast` events (no address in `func_exit`).
        CygProfileFast =>
            TraceEntry::single(
                "CYG_PROFILE_FAST",
                "/cyg-profile/glxgears-cyg-profile-fast",
                5_161,
                11,
            )
            .traced_by(LTTNG_UST_2_3),

        /// Non-standard field sizes.
        FunkyTrace => TraceEntry::single("FUNKY_TRACE", "/funky_trace", 100_002, 0),

        /// Kernel trace with 64-bit aligned headers.
        Arm64BitHeader =>
            TraceEntry::single("ARM_64_BIT_HEADER", "/bug446190", 31_556, 6)
                .traced_by(LTTNG_KERNEL_2_5),

        /// Kernel trace whose byte order flips between streams.
        FlippingEndianness =>
            TraceEntry::single("FLIPPING_ENDIANNESS", "/flipping-endianness", 14_310, 41)
                .traced_by(LTTNG_KERNEL_2_5),

        /// Dynamic scope, timestamp in a field and an empty stream.
        Dynscope =>
            TraceEntry::single("DYNSCOPE", "/ctfwriter_JF8nq3", 101_003, 1)
                .traced_by("generated"),

        /// Set of many traces; not a single trace.
        TraceExperiment => TraceEntry::collection("TRACE_EXPERIMENT", "/exp"),

        /// Debug info, LTTng 2.8 development snapshot.
        DebugInfo =>
            TraceEntry::single("DEBUG_INFO", "/debuginfo-test-app2", 41, 1)
                .traced_by("lttng-ust 2.8~pre")
                .deprecated(
                    "event names changed before the final LTTng 2.8 release; use DEBUG_INFO3",
                ),

        /// Debug info, LTTng 2.8-rc2.
        DebugInfo3 =>
            TraceEntry::single("DEBUG_INFO3", "/debuginfo-test-app3", 291, 2)
                .traced_by("lttng-ust 2.8 RC2")
                .deprecated(
                    "has_debug_link and has_build_id fields were added after this trace; use DEBUG_INFO4",
                ),

        /// Debug info, final LTTng 2.8.
        DebugInfo4 =>
            TraceEntry::single("DEBUG_INFO4", "/debuginfo-test-app4", 32, 1)
                .traced_by("lttng-ust 2.8"),

        /// Synthetic process doing an exec, with debug info events.
        DebugInfoSynthExec =>
            TraceEntry::single("DEBUG_INFO_SYNTH_EXEC", "/debuginfo-synth-exec", 9, 1)
                .traced_by(BABELTRACE_WRITER),

        /// Two synthetic processes doing a statedump at the same time.
        DebugInfoSynthTwoProcesses =>
            TraceEntry::single(
                "DEBUG_INFO_SYNTH_TWO_PROCESSES",
                "/debuginfo-synth-two-processes",
                12,
                1,
            )
            .traced_by(BABELTRACE_WRITER),

        /// Binaries with various combinations of build IDs and debug links.
        DebugInfoSynthBuildidDebuglink =>
            TraceEntry::single(
                "DEBUG_INFO_SYNTH_BUILDID_DEBUGLINK",
                "/debuginfo-synth-buildid-debuglink",
                20,
                1,
            )
            .traced_by(BABELTRACE_WRITER),

        /// UST memory analysis events. ~0.53 s.
        MemoryAnalysis =>
            TraceEntry::single("MEMORY_ANALYSIS", "/memory", 328_056, 1)
                .traced_by("lttng-ust 2.7"),

        /// perf-to-CTF conversion; CPUs come from the `perf_cpu` event field
        /// instead of `cpu_id`.
        PerfTaskset2 =>
            TraceEntry::single("PERF_TASKSET2", "/perf-taskset2", 1_500, 1).traced_by("perf"),

        /// Creation of many threads, for vertical scaling of analyses.
        ManyThreads =>
            TraceEntry::single("MANY_THREADS", "/many-threads", 240_644, 1)
                .traced_by("lttng-kernel 2.8~pre"),

        /// Kernel side of the clock-offset "context-switch" experiment.
        ContextSwitchesKernel =>
            TraceEntry::single(
                "CONTEXT_SWITCHES_KERNEL",
                "/context-switches/context-switches-kernel",
                241_566,
                92,
            )
            .traced_by("lttng-kernel 2.6.3"),

        /// Userspace side of the clock-offset "context-switch" experiment.
        ContextSwitchesUst =>
            TraceEntry::single(
                "CONTEXT_SWITCHES_UST",
                "/context-switches/context-switches-ust",
                3_934,
                49,
            )
            .traced_by("lttng-ust 2.6.3"),

        /// Streams with different start and end times, for stream intersection.
        UnevenStreams =>
            TraceEntry::single("UNEVEN_STREAMS", "/uneven-streams", 534_619, 6)
                .traced_by("lttng-kernel 2.10.0"),

        /// One MPI_Ssend/MPI_Irecv exchange, 2 ranks on one node.
        MpiSsendIrecv =>
            TraceEntry::single("MPI_SSEND_IRECV", "/mpi_ssend_irecv", 637, 1).traced_by(SCORE_P),

        /// One MPI_Gather over 4 ranks on one node.
        MpiGather => TraceEntry::single("MPI_GATHER", "/mpi_gather", 682, 3).traced_by(SCORE_P),

        /// MPI_Allreduce over two communicators, 8 ranks on one node.
        MpiAllreduce =>
            TraceEntry::single("MPI_ALLREDUCE", "/mpi_allreduce", 891, 3).traced_by(SCORE_P),

        /// MPI plus pthreads: 4 ranks over two nodes, 2 extra threads per rank.
        MpiPthread =>
            TraceEntry::single("MPI_PTHREAD", "/mpi_pthread", 870, 2).traced_by(SCORE_P),

        /// 4 ranks on 2 nodes with one node's bandwidth throttled, then restored.
        BandwidthIssue =>
            TraceEntry::single("BANDWIDTH_ISSUE", "/bandwidth_issue", 1_680, 50)
                .traced_by(SCORE_P),

        /// 5 MPI exchanges between two nodes with two PAPI metrics recorded.
        PapiCounters =>
            TraceEntry::single("PAPI_COUNTERS", "/papi_counters", 873, 1).traced_by(SCORE_P),

        /// Simple ROS 2 system for message flow analysis.
        Ros2 => TraceEntry::single("ROS2", "/ros2", 99_338, 11).traced_by("lttng-ust 2.11.0"),

        /// MPI_Sendrecv with rusage system and user times, metrics stored as doubles.
        DoubleCounters =>
            TraceEntry::single("DOUBLE_COUNTERS", "/double_counters", 693, 1).traced_by(SCORE_P),

        /// DPDK service cores sample application, for logical core analysis.
        DpdkServiceCores =>
            TraceEntry::single("DPDK_SERVICE_CORES", "/dpdk_service_cores", 66_464, 25)
                .traced_by("DPDK trace library"),

        /// aarch64 trace with zero-length `lttng_ust_field_sequence` fields
        /// using a `uint32_t` length type.
        CtfSequenceEmpty =>
            TraceEntry::single("CTF_SEQUENCE_EMPTY", "/ctf-sequence-empty", 10, 1)
                .traced_by("lttng-ust 2.13.5"),

        /// CTF 2 data test with variable-length integers, from the yactfr
        /// test suite. Has no attributes or display bases.
        Ctf2VlInts =>
            TraceEntry::single("CTF2_VL_INTS", "/CTF2-vl-ints", 1, 0).traced_by("hand-generated"),
    }
}
