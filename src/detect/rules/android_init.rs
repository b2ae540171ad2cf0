//! Android initialization analysis.
//!
//! Decides whether the TrustArc instance is created and started, and in what
//! order, across a project's Kotlin/Java sources. Two architectures are
//! recognized:
//!
//! - **Dependency injection**: the instance is provided by Hilt/Dagger/Koin
//!   and started by an injected manager or the application class.
//! - **Traditional**: the instance is constructed directly and started at a
//!   call site, either in the same file or elsewhere.
//!
//! All checks are textual. There is no parser and no data-flow analysis, so
//! results are heuristics with known false positives and negatives.

use regex::Regex;
use std::path::Path;

use crate::detect::{ArtifactMatch, Category, Issue};

/// Package namespace of the Android SDK.
pub const SDK_NAMESPACE: &str = "com.truste.androidmobileconsentsdk";
/// SDK type name.
pub const SDK_TYPE: &str = "TrustArc";

lazy_static::lazy_static! {
    static ref CONSTRUCTOR_CALL: Regex = Regex::new(r"\bTrustArc\s*\(").unwrap();
    static ref MODE_SELECTOR: Regex = Regex::new(r"\bSdkMode\.").unwrap();
    static ref START_CALL: Regex = Regex::new(r"\.start\s*\(").unwrap();
    static ref OPEN_CM_CALL: Regex = Regex::new(r"\.openCM\s*\(").unwrap();
    static ref DEBUG_LOG_CALL: Regex = Regex::new(r"\.enableDebugLog\s*\(").unwrap();

    static ref DI_MARKERS: Vec<Regex> = vec![
        Regex::new(r"@Module\b").unwrap(),
        Regex::new(r"@Provides\b").unwrap(),
        Regex::new(r"@Inject\b").unwrap(),
        Regex::new(r"@HiltAndroidApp\b").unwrap(),
        Regex::new(r"@InstallIn\b").unwrap(),
        Regex::new(r"@Singleton\b").unwrap(),
        Regex::new(r"@Component\b").unwrap(),
        // Koin
        Regex::new(r"\bmodule\s*\{").unwrap(),
        Regex::new(r"\bsingle\s*(<[^>]*>)?\s*\{").unwrap(),
        Regex::new(r"\bfactory\s*(<[^>]*>)?\s*\{").unwrap(),
    ];

    static ref PROVIDER_DECLARATIONS: Vec<Regex> = vec![
        // Kotlin: @Provides fun provideTrustArc(...): TrustArc
        Regex::new(r"(?s)@Provides\b.{0,200}?fun\s+\w+\s*\([^)]*\)\s*:\s*TrustArc\b").unwrap(),
        // Java: @Provides TrustArc provideTrustArc(...)
        Regex::new(r"(?s)@Provides\b.{0,200}?\bTrustArc\s+\w+\s*\(").unwrap(),
        // Koin: single { TrustArc(...) } / single<TrustArc> { ... }
        Regex::new(r"\bsingle\s*\{\s*TrustArc\s*\(").unwrap(),
        Regex::new(r"\bsingle\s*<\s*TrustArc\s*>").unwrap(),
    ];

    static ref INJECTED: Regex = Regex::new(r"@(Inject|Singleton)\b").unwrap();
    static ref HILT_APPLICATION: Regex = Regex::new(r"@HiltAndroidApp\b").unwrap();
    static ref INIT_SHAPED_CALL: Regex =
        Regex::new(r"\.(initialize|init|start|setup)\s*\(").unwrap();

    static ref APPLICATION_CLASS: Regex = Regex::new(
        r"\bclass\s+\w+[^{]*?(:\s*Application\s*\(|\bextends\s+Application\b)"
    ).unwrap();
    static ref MANAGER_CLASS: Regex = Regex::new(
        r"\b(class|object)\s+\w*(ConsentManager|TrustArcManager|SdkManager|ConsentHelper|TrustArcWrapper|ConsentWrapper)\w*"
    ).unwrap();

    static ref SINGLETON_ACCESSORS: Vec<Regex> = vec![
        Regex::new(r"\bTASharedInstance\b").unwrap(),
        Regex::new(r"\bgetInstance\s*\(").unwrap(),
        Regex::new(r"\bcompanion\s+object\b").unwrap(),
    ];
}

const DEBUG_LOG_SUGGESTION: &str = "Add: trustArc.enableDebugLog(true)";

/// Roles a source file plays. A file can hold several roles at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileRoles {
    /// Imports the SDK namespace and names the SDK type.
    pub usage: bool,
    /// Contains DI framework markers and mentions the SDK type.
    pub dependency_injection: bool,
    /// Declares a subclass of `Application`.
    pub application_entry: bool,
    /// Declares a consent manager / wrapper class.
    pub manager: bool,
}

impl FileRoles {
    pub fn classify(content: &str) -> Self {
        let mentions_sdk = content.contains(SDK_TYPE);
        Self {
            usage: is_usage_file(content),
            dependency_injection: mentions_sdk && DI_MARKERS.iter().any(|re| re.is_match(content)),
            application_entry: APPLICATION_CLASS.is_match(content),
            manager: MANAGER_CLASS.is_match(content),
        }
    }
}

/// Whether a file references both the SDK type and its namespace.
pub fn is_usage_file(content: &str) -> bool {
    content.contains(SDK_TYPE) && content.contains(SDK_NAMESPACE)
}

/// Whether a file constructs the SDK.
///
/// Two independent probes, both required: a constructor-shaped call and a
/// mode selector token. They need not be on the same line, so a constructor
/// whose arguments are built in separate statements still counts.
pub fn has_constructor_site(content: &str) -> bool {
    let constructor_shaped = CONSTRUCTOR_CALL.is_match(content);
    let mode_selected = MODE_SELECTOR.is_match(content);
    constructor_shaped && mode_selected
}

/// Whether a file contains a chained `start(` call.
pub fn has_start_site(content: &str) -> bool {
    START_CALL.is_match(content)
}

/// Line-window heuristic: does the `start(` call at `index` belong to the SDK?
///
/// Looks at the call's own line and the two lines before it for the SDK
/// variable name, case-insensitively. This approximates data flow for the
/// common shapes `trustArc.start(...)` and a builder chain broken over a
/// couple of lines. It misses receivers named differently and accepts any
/// unrelated `start(` that happens to sit near the word.
pub fn start_window_mentions_sdk(lines: &[&str], index: usize) -> bool {
    let first = index.saturating_sub(2);
    lines[first..=index]
        .iter()
        .any(|line| line.to_lowercase().contains("trustarc"))
}

/// Positions (0-based lines) of the last constructor and the last SDK
/// `start(` call in one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineOrder {
    pub constructor: usize,
    pub start: usize,
}

impl LineOrder {
    pub fn start_precedes_constructor(&self) -> bool {
        self.start < self.constructor
    }
}

/// Locate constructor and start lines in one file, if both exist.
pub fn line_order(content: &str) -> Option<LineOrder> {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut constructor = None;
    let mut start = None;

    for (i, line) in lines.iter().enumerate() {
        if CONSTRUCTOR_CALL.is_match(line) {
            constructor = Some(i);
        }
        if START_CALL.is_match(line) && start_window_mentions_sdk(&lines, i) {
            start = Some(i);
        }
    }

    Some(LineOrder {
        constructor: constructor?,
        start: start?,
    })
}

/// 0-based line of an `openCM(` call that comes before the first SDK
/// `start(` call in the same file.
pub fn open_before_start(content: &str) -> Option<usize> {
    let lines: Vec<&str> = content.split('\n').collect();
    let open = lines.iter().position(|l| OPEN_CM_CALL.is_match(l))?;
    let start = (0..lines.len())
        .find(|&i| START_CALL.is_match(lines[i]) && start_window_mentions_sdk(&lines, i))?;
    if open < start {
        Some(open)
    } else {
        None
    }
}

/// How the project wires up the SDK instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Architecture {
    DependencyInjection,
    Traditional,
}

struct SourceFile<'a> {
    path: &'a Path,
    content: &'a str,
    roles: FileRoles,
    constructs: bool,
    starts: bool,
}

impl<'a> SourceFile<'a> {
    fn new(source: &'a ArtifactMatch) -> Self {
        let content = source.content.as_str();
        let roles = FileRoles::classify(content);
        Self {
            path: &source.path,
            content,
            roles,
            constructs: roles.usage && has_constructor_site(content),
            starts: roles.usage && has_start_site(content),
        }
    }
}

/// Analyzes SDK initialization across a set of Kotlin/Java sources.
pub struct InitializationAnalyzer<'a> {
    files: Vec<SourceFile<'a>>,
}

impl<'a> InitializationAnalyzer<'a> {
    pub fn new(sources: &'a [ArtifactMatch]) -> Self {
        Self {
            files: sources.iter().map(SourceFile::new).collect(),
        }
    }

    pub fn architecture(&self) -> Architecture {
        if self.files.iter().any(|f| f.roles.dependency_injection) {
            Architecture::DependencyInjection
        } else {
            Architecture::Traditional
        }
    }

    /// Roles of every analyzed file, in input order.
    pub fn roles(&self) -> impl Iterator<Item = (&Path, FileRoles)> + '_ {
        self.files.iter().map(|f| (f.path, f.roles))
    }

    pub fn analyze(&self) -> Vec<Issue> {
        match self.architecture() {
            Architecture::DependencyInjection => self.analyze_injected(),
            Architecture::Traditional => self.analyze_traditional(),
        }
    }

    fn analyze_injected(&self) -> Vec<Issue> {
        let mut issues = Vec::new();

        let provider = self.files.iter().find(|f| {
            f.roles.dependency_injection
                && PROVIDER_DECLARATIONS.iter().any(|re| re.is_match(f.content))
        });
        if let Some(f) = provider {
            issues.push(
                Issue::success(
                    Category::Architecture,
                    "TrustArc instance is provided through dependency injection",
                )
                .with_file(f.path),
            );
        }

        let manager = self.files.iter().find(|f| {
            f.roles.manager && has_start_site(f.content) && INJECTED.is_match(f.content)
        });
        if let Some(f) = manager {
            issues.push(
                Issue::success(
                    Category::Architecture,
                    "TrustArc is started by an injected consent manager",
                )
                .with_file(f.path),
            );
        }

        let application = self.files.iter().find(|f| {
            f.roles.application_entry
                && HILT_APPLICATION.is_match(f.content)
                && INIT_SHAPED_CALL.is_match(f.content)
        });
        if let Some(f) = application {
            issues.push(
                Issue::success(
                    Category::Initialization,
                    "Consent SDK is initialized from the DI-managed Application class",
                )
                .with_file(f.path),
            );
        }

        let started_anywhere = self
            .files
            .iter()
            .any(|f| f.starts || (f.roles.manager && has_start_site(f.content)));

        if let Some(f) = provider {
            if manager.is_none() && application.is_none() && !started_anywhere {
                issues.push(
                    Issue::error(
                        Category::Initialization,
                        "TrustArc is provided via DI but start() is never called",
                    )
                    .with_file(f.path)
                    .with_suggestion(
                        "Inject TrustArc into a manager or the Application class and call start(domainName = \"your.domain\")",
                    ),
                );
            }
        }

        let any_success = provider.is_some() || manager.is_some() || application.is_some();
        if any_success && !self.debug_logging_enabled() {
            issues.push(debug_logging_hint());
        }

        issues
    }

    fn analyze_traditional(&self) -> Vec<Issue> {
        let mut issues = self.traditional_order();
        if !self.debug_logging_enabled() {
            issues.push(debug_logging_hint());
        }
        issues
    }

    fn traditional_order(&self) -> Vec<Issue> {
        let constructors: Vec<&SourceFile> = self.files.iter().filter(|f| f.constructs).collect();
        let starters: Vec<&SourceFile> = self.files.iter().filter(|f| f.starts).collect();

        let Some(first_constructor) = constructors.first() else {
            return vec![Issue::error(Category::Initialization, "TrustArc instance is never created")
                .with_suggestion("Create it: val trustArc = TrustArc(context, SdkMode.Standard)")];
        };

        if starters.is_empty() {
            return vec![Issue::error(
                Category::Initialization,
                "TrustArc instance is constructed but start() is never called",
            )
            .with_file(first_constructor.path)
            .with_suggestion("Call trustArc.start(domainName = \"your.domain\") after constructing it")];
        }

        let same_file: Vec<&SourceFile> = constructors
            .iter()
            .copied()
            .filter(|f| f.starts)
            .collect();

        if same_file.is_empty() {
            return vec![self.cross_file_issue(&starters)];
        }

        let mut issues = Vec::new();
        for f in same_file {
            match line_order(f.content) {
                Some(order) if order.start_precedes_constructor() => issues.push(
                    Issue::error(Category::Initialization, "start() called before TrustArc constructor")
                        .with_file(f.path)
                        .with_line(order.start + 1)
                        .with_suggestion("Create the TrustArc instance before calling start()"),
                ),
                Some(_) => issues.push(
                    Issue::success(
                        Category::Initialization,
                        "TrustArc is constructed and started in the correct order",
                    )
                    .with_file(f.path),
                ),
                None => {}
            }

            if let Some(line) = open_before_start(f.content) {
                issues.push(
                    Issue::warning(Category::Initialization, "openCM() called before start()")
                        .with_file(f.path)
                        .with_line(line + 1)
                        .with_suggestion("Open the consent dialog only after start() has been called"),
                );
            }
        }
        issues
    }

    fn cross_file_issue(&self, starters: &[&SourceFile]) -> Issue {
        let singleton = starters
            .iter()
            .find(|f| SINGLETON_ACCESSORS.iter().any(|re| re.is_match(f.content)));

        match singleton {
            Some(f) => Issue::success(
                Category::Initialization,
                "TrustArc uses a singleton pattern for cross-activity access",
            )
            .with_file(f.path),
            None => Issue::info(
                Category::Initialization,
                "TrustArc is constructed and started in different files",
            )
            .with_file(starters[0].path)
            .with_suggestion("Verify the constructor runs before start() in the app's runtime call order"),
        }
    }

    fn debug_logging_enabled(&self) -> bool {
        self.files.iter().any(|f| DEBUG_LOG_CALL.is_match(f.content))
    }
}

fn debug_logging_hint() -> Issue {
    Issue::info(
        Category::Configuration,
        "Consider enabling debug logging for development",
    )
    .with_suggestion(DEBUG_LOG_SUGGESTION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::Severity;
    use std::path::PathBuf;

    fn source(name: &str, content: &str) -> ArtifactMatch {
        ArtifactMatch {
            path: PathBuf::from(name),
            content: content.to_string(),
        }
    }

    fn count(issues: &[Issue], severity: Severity, category: Category) -> usize {
        issues
            .iter()
            .filter(|i| i.severity == severity && i.category == category)
            .count()
    }

    fn errors(issues: &[Issue]) -> Vec<&Issue> {
        issues.iter().filter(|i| i.severity == Severity::Error).collect()
    }

    const IMPORTS: &str = "import com.truste.androidmobileconsentsdk.TrustArc\nimport com.truste.androidmobileconsentsdk.SdkMode\n";

    #[test]
    fn test_roles_overlap() {
        let content = format!(
            "{}@Singleton\nclass ConsentManager @Inject constructor(private val trustArc: TrustArc) {{\n    fun init() {{ trustArc.start(\"d\") }}\n}}\n",
            IMPORTS
        );
        let roles = FileRoles::classify(&content);
        assert!(roles.usage);
        assert!(roles.dependency_injection);
        assert!(roles.manager);
        assert!(!roles.application_entry);
    }

    #[test]
    fn test_application_entry_role() {
        assert!(FileRoles::classify("class App : Application() {}").application_entry);
        assert!(FileRoles::classify("public class App extends Application {").application_entry);
        assert!(!FileRoles::classify("class Main : AppCompatActivity() {}").application_entry);
    }

    #[test]
    fn test_di_role_requires_sdk_mention() {
        let roles = FileRoles::classify("@Module\nobject NetworkModule { @Provides fun client() = OkHttp() }");
        assert!(!roles.dependency_injection);
    }

    #[test]
    fn test_constructor_probes_are_conjunctive_across_lines() {
        let split = "val mode = SdkMode.Standard\nval ta = TrustArc(context, mode)\n";
        assert!(has_constructor_site(split));
        assert!(!has_constructor_site("val ta = TrustArc(context, mode)\n"));
        assert!(!has_constructor_site("val mode = SdkMode.Standard\n"));
        assert!(!has_constructor_site("fun provideTrustArc(): TrustArc = x // SdkMode.Standard"));
    }

    #[test]
    fn test_start_window() {
        let lines = vec!["val trustArc = build()", "// comment", "x", ".start()"];
        assert!(!start_window_mentions_sdk(&lines, 3));
        assert!(start_window_mentions_sdk(&lines, 2));
        assert!(start_window_mentions_sdk(&lines, 0));
        let same_line = vec!["TRUSTARC.start()"];
        assert!(start_window_mentions_sdk(&same_line, 0));
    }

    #[test]
    fn test_line_order_uses_last_positions() {
        let content = "trustArc.start(a)\nTrustArc(ctx, SdkMode.Standard)\ntrustArc.start(b)\n";
        let order = line_order(content).unwrap();
        assert_eq!(order, LineOrder { constructor: 1, start: 2 });
        assert!(!order.start_precedes_constructor());
    }

    #[test]
    fn test_line_order_ignores_unrelated_start() {
        let content = "TrustArc(ctx, SdkMode.Standard)\n\n\n\nthread.start()\n";
        assert_eq!(line_order(content), None);
    }

    #[test]
    fn test_start_before_constructor_reports_line() {
        let content = [
            "import com.truste.androidmobileconsentsdk.TrustArc",
            "import com.truste.androidmobileconsentsdk.SdkMode",
            "val trustArc = lazyInstance",
            "    .start(domainName = \"example\")",
            "",
            "val created = TrustArc(ctx, SdkMode.Standard)",
        ]
        .join("\n");
        let sources = vec![source("Main.kt", &content)];
        let issues = InitializationAnalyzer::new(&sources).analyze();

        let errs = errors(&issues);
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].line, Some(4));
        assert_eq!(errs[0].category, Category::Initialization);
    }

    #[test]
    fn test_correct_order_same_file() {
        let content = format!(
            "{}val trustArc = TrustArc(this, SdkMode.Standard)\ntrustArc.enableDebugLog(true)\ntrustArc.start(domainName = \"d\")\n",
            IMPORTS
        );
        let sources = vec![source("App.kt", &content)];
        let issues = InitializationAnalyzer::new(&sources).analyze();

        assert_eq!(issues.len(), 1);
        assert_eq!(count(&issues, Severity::Success, Category::Initialization), 1);
    }

    #[test]
    fn test_never_created() {
        let content = format!("{}fun go(trustArc: TrustArc) {{ trustArc.start(\"d\") }}\n", IMPORTS);
        let sources = vec![source("A.kt", &content)];
        let issues = InitializationAnalyzer::new(&sources).analyze();

        assert_eq!(errors(&issues).len(), 1);
        assert!(errors(&issues)[0].message.contains("never created"));
        // debug logging hint is still emitted
        assert_eq!(count(&issues, Severity::Info, Category::Configuration), 1);
    }

    #[test]
    fn test_never_started_cites_constructor_file() {
        let content = format!("{}val trustArc = TrustArc(ctx, SdkMode.Standard)\n", IMPORTS);
        let sources = vec![source("Create.kt", &content)];
        let issues = InitializationAnalyzer::new(&sources).analyze();

        let errs = errors(&issues);
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].file.as_deref(), Some("Create.kt"));
    }

    #[test]
    fn test_cross_file_with_singleton() {
        let a = format!("{}val trustArc = TrustArc(ctx, SdkMode.Standard)\n", IMPORTS);
        let b = format!(
            "{}fun show() {{\n    TrustArc.TASharedInstance.start(domainName = \"d\")\n}}\n",
            IMPORTS
        );
        let sources = vec![source("A.kt", &a), source("B.kt", &b)];
        let issues = InitializationAnalyzer::new(&sources).analyze();

        assert!(errors(&issues).is_empty());
        assert_eq!(count(&issues, Severity::Success, Category::Initialization), 1);
        assert_eq!(issues[0].file.as_deref(), Some("B.kt"));
    }

    #[test]
    fn test_cross_file_without_proof_is_info() {
        let a = format!("{}val trustArc = TrustArc(ctx, SdkMode.Standard)\n", IMPORTS);
        let b = format!("{}fun go(trustArc: TrustArc) {{ trustArc.start(\"d\") }}\n", IMPORTS);
        let sources = vec![source("A.kt", &a), source("B.kt", &b)];
        let issues = InitializationAnalyzer::new(&sources).analyze();

        assert!(errors(&issues).is_empty());
        assert_eq!(count(&issues, Severity::Info, Category::Initialization), 1);
        assert_eq!(count(&issues, Severity::Success, Category::Initialization), 0);
    }

    #[test]
    fn test_open_cm_before_start_warns() {
        let content = format!(
            "{}val trustArc = TrustArc(ctx, SdkMode.Standard)\ntrustArc.openCM()\ntrustArc.start(\"d\")\n",
            IMPORTS
        );
        let sources = vec![source("A.kt", &content)];
        let issues = InitializationAnalyzer::new(&sources).analyze();

        let warnings: Vec<_> = issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].line, Some(4));
    }

    #[test]
    fn test_di_provider_and_injected_manager() {
        let module = format!(
            "{}@Module\n@InstallIn(SingletonComponent::class)\nobject ConsentModule {{\n    @Provides\n    @Singleton\n    fun provideTrustArc(@ApplicationContext ctx: Context): TrustArc = TrustArc(ctx, SdkMode.Standard)\n}}\n",
            IMPORTS
        );
        let manager = format!(
            "{}@Singleton\nclass ConsentManager @Inject constructor(private val trustArc: TrustArc) {{\n    fun begin() {{ trustArc.start(domainName = \"d\") }}\n}}\n",
            IMPORTS
        );
        // a direct pair elsewhere does not change the DI verdict
        let direct = format!(
            "{}trustArc.start(\"d\")\nval trustArc = TrustArc(ctx, SdkMode.Standard)\n",
            IMPORTS
        );
        let sources = vec![
            source("ConsentModule.kt", &module),
            source("ConsentManager.kt", &manager),
            source("Legacy.kt", &direct),
        ];
        let analyzer = InitializationAnalyzer::new(&sources);
        assert_eq!(analyzer.architecture(), Architecture::DependencyInjection);

        let issues = analyzer.analyze();
        assert_eq!(count(&issues, Severity::Success, Category::Architecture), 2);
        assert!(errors(&issues).is_empty());
    }

    #[test]
    fn test_di_provider_never_started() {
        let module = format!(
            "{}@Module\nobject ConsentModule {{\n    @Provides\n    fun provideTrustArc(ctx: Context): TrustArc = TrustArc(ctx, SdkMode.Standard)\n}}\n",
            IMPORTS
        );
        let sources = vec![source("ConsentModule.kt", &module)];
        let issues = InitializationAnalyzer::new(&sources).analyze();

        let errs = errors(&issues);
        assert_eq!(errs.len(), 1);
        assert!(errs[0].message.contains("never called"));
        assert_eq!(count(&issues, Severity::Info, Category::Configuration), 1);
    }

    #[test]
    fn test_di_hilt_application_initializer() {
        let module = format!(
            "{}val consentModule = module {{\n    single {{ TrustArc(androidContext(), SdkMode.Standard) }}\n}}\n",
            IMPORTS
        );
        let app = "@HiltAndroidApp\nclass App : Application() {\n    @Inject lateinit var consent: ConsentFacade\n    override fun onCreate() { super.onCreate(); consent.initialize(this) }\n}\n";
        let sources = vec![source("Modules.kt", &module), source("App.kt", app)];
        let issues = InitializationAnalyzer::new(&sources).analyze();

        assert_eq!(count(&issues, Severity::Success, Category::Architecture), 1);
        assert_eq!(count(&issues, Severity::Success, Category::Initialization), 1);
        assert!(errors(&issues).is_empty());
    }

    #[test]
    fn test_di_debug_hint_suppressed_when_enabled() {
        let module = format!(
            "{}@Module\nobject M {{\n    @Provides\n    fun provideTrustArc(ctx: Context): TrustArc = TrustArc(ctx, SdkMode.Standard).also {{ it.enableDebugLog(true); it.start(\"d\") }}\n}}\n",
            IMPORTS
        );
        let sources = vec![source("M.kt", &module)];
        let issues = InitializationAnalyzer::new(&sources).analyze();

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Success);
    }
}
