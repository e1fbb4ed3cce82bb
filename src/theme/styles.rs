//! Global CSS styles for ChainFund.
//!
//! Light surfaces with a blue-to-violet accent gradient. Colour roles match
//! the palette listed in `chainfund_ui`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --background: #f8fafc;
  --surface: #ffffff;
  --surface-muted: #f1f5f9;
  --border: #e2e8f0;

  /* BRAND */
  --primary: #2563eb;
  --primary-soft: rgba(37, 99, 235, 0.1);
  --violet: #7c3aed;
  --gradient: linear-gradient(135deg, #2563eb 0%, #7c3aed 100%);
  --gradient-soft: linear-gradient(135deg, rgba(37, 99, 235, 0.08) 0%, rgba(124, 58, 237, 0.08) 100%);

  /* SEMANTIC */
  --success: #16a34a;
  --success-soft: rgba(22, 163, 74, 0.12);
  --warning: #d97706;
  --warning-soft: rgba(217, 119, 6, 0.12);
  --danger: #dc2626;
  --danger-soft: rgba(220, 38, 38, 0.1);

  /* TEXT */
  --text: #0f172a;
  --text-muted: #64748b;
  --text-inverse: #ffffff;

  /* Typography */
  --font-sans: 'Inter', -apple-system, 'Segoe UI', Roboto, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.25rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3.5rem;

  /* Shape */
  --radius: 0.75rem;
  --radius-sm: 0.5rem;
  --shadow: 0 1px 3px rgba(15, 23, 42, 0.08), 0 1px 2px rgba(15, 23, 42, 0.04);
  --shadow-lg: 0 12px 32px rgba(15, 23, 42, 0.12);

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  background: var(--background);
  color: var(--text);
  font-family: var(--font-sans);
  font-size: 16px;
  line-height: 1.5;
  -webkit-font-smoothing: antialiased;
}

a {
  color: inherit;
  text-decoration: none;
}

img {
  display: block;
  max-width: 100%;
}

ul {
  list-style: none;
}

/* === Layout === */
.page {
  min-height: 100vh;
  padding-bottom: 4rem;
}

.container {
  width: 100%;
  max-width: 1200px;
  margin: 0 auto;
  padding: 2rem 1.5rem 0;
}

.container.narrow {
  max-width: 860px;
}

.stack > * + * { margin-top: 0.75rem; }
.stack-sm > * + * { margin-top: 0.5rem; }
.stack-lg > * + * { margin-top: 1.5rem; }
.stack-xl > * + * { margin-top: 2.5rem; }

.row {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.row-between {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.row-end {
  display: flex;
  justify-content: flex-end;
  gap: 0.75rem;
}

.wrap { flex-wrap: wrap; }
.grow { flex: 1; min-width: 0; }
.center { text-align: center; }
.right { text-align: right; }

.grid {
  display: grid;
  gap: 1.5rem;
}

.grid.two { grid-template-columns: repeat(2, minmax(0, 1fr)); }
.grid.three { grid-template-columns: repeat(3, minmax(0, 1fr)); }
.grid.four { grid-template-columns: repeat(4, minmax(0, 1fr)); }

.detail-grid {
  display: grid;
  grid-template-columns: minmax(0, 2fr) minmax(0, 1fr);
  gap: 2rem;
  align-items: start;
}

.form-grid {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 1rem;
}

@media (max-width: 900px) {
  .grid.three, .grid.four { grid-template-columns: repeat(2, minmax(0, 1fr)); }
  .detail-grid { grid-template-columns: 1fr; }
}

@media (max-width: 640px) {
  .grid.two, .grid.three, .grid.four, .form-grid { grid-template-columns: 1fr; }
}

/* === Typography === */
.display {
  font-size: var(--text-3xl);
  font-weight: 800;
  line-height: 1.1;
  letter-spacing: -0.02em;
}

.page-title {
  font-size: var(--text-2xl);
  font-weight: 700;
  line-height: 1.2;
}

.section-title {
  font-size: var(--text-xl);
  font-weight: 700;
}

.section-head { margin-bottom: 2rem; }

.lead { font-size: var(--text-lg); }
.large { font-size: var(--text-lg); }
.small { font-size: var(--text-sm); }
.strong { font-weight: 600; }
.muted { color: var(--text-muted); }
.primary { color: var(--primary); }
.success { color: var(--success); }
.mono { font-family: var(--font-mono); }

.gradient-text {
  background: var(--gradient);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.link {
  color: var(--primary);
  font-weight: 500;
}

.link:hover { text-decoration: underline; }

.clamp-2 {
  display: -webkit-box;
  -webkit-line-clamp: 2;
  -webkit-box-orient: vertical;
  overflow: hidden;
}

.prose p {
  color: var(--text-muted);
  line-height: 1.75;
}

.prose p + p { margin-top: 1rem; }

/* === Navigation Header === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 20;
  background: rgba(255, 255, 255, 0.85);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid var(--border);
}

.nav-inner {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0.75rem 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.brand {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-weight: 800;
  font-size: var(--text-lg);
}

.brand-name {
  background: var(--gradient);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.nav-links {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.nav-link {
  padding: 0.5rem 0.875rem;
  border-radius: var(--radius-sm);
  color: var(--text-muted);
  font-weight: 500;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.nav-link:hover { background: var(--surface-muted); color: var(--text); }
.nav-link.active { background: var(--primary-soft); color: var(--primary); }

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 0.625rem 1.125rem;
  border-radius: var(--radius-sm);
  border: 1px solid transparent;
  font: inherit;
  font-weight: 600;
  font-size: var(--text-sm);
  cursor: pointer;
  transition: all var(--transition-fast);
  white-space: nowrap;
}

.btn:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.btn-primary { background: var(--primary); color: var(--text-inverse); }
.btn-primary:hover:not(:disabled) { background: #1d4ed8; }

.btn-gradient { background: var(--gradient); color: var(--text-inverse); }
.btn-gradient:hover:not(:disabled) { box-shadow: 0 6px 18px rgba(37, 99, 235, 0.35); transform: translateY(-1px); }

.btn-outline { background: var(--surface); border-color: var(--border); color: var(--text); }
.btn-outline:hover:not(:disabled) { border-color: var(--primary); color: var(--primary); }

.btn-ghost { background: transparent; color: var(--text-muted); }
.btn-ghost:hover:not(:disabled) { background: var(--surface-muted); color: var(--text); }

.btn-destructive { background: var(--danger); color: var(--text-inverse); }
.btn-destructive:hover:not(:disabled) { background: #b91c1c; }

.btn-sm { padding: 0.375rem 0.75rem; font-size: var(--text-xs); }
.btn-lg { padding: 0.875rem 1.5rem; font-size: var(--text-base); }
.btn-block { width: 100%; }

.back-link { padding-left: 0; }

.action-tile {
  height: 4rem;
  font-size: var(--text-base);
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2rem;
  height: 2rem;
  border: none;
  border-radius: 999px;
  background: transparent;
  color: var(--text-muted);
  font-size: 1.25rem;
  cursor: pointer;
}

.icon-btn:hover { background: var(--surface-muted); color: var(--text); }

/* === Cards === */
.card {
  display: block;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  box-shadow: var(--shadow);
  padding: 1.5rem;
}

.card > * + * { margin-top: 1rem; }

.card-clickable {
  cursor: pointer;
  transition: box-shadow var(--transition-normal), transform var(--transition-normal);
}

.card-clickable:hover {
  box-shadow: var(--shadow-lg);
  transform: translateY(-2px);
}

.card-gradient {
  background: var(--gradient-soft);
  border: none;
}

.card-title {
  font-size: var(--text-lg);
  font-weight: 700;
}

.card-subtitle {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.card-content > * + * { margin-top: 1rem; }

.empty-state {
  text-align: center;
  padding: 2.5rem 1.5rem;
}

.notice {
  background: var(--surface-muted);
  border-radius: var(--radius-sm);
  padding: 1rem;
}

.notice.danger {
  background: var(--danger-soft);
  color: var(--danger);
}

.notice ul li + li { margin-top: 0.25rem; }

.not-found-panel { text-align: center; }

.stat-grid {
  display: grid;
  gap: 1rem;
}

.stat-grid.two { grid-template-columns: repeat(2, 1fr); }
.stat-grid.three { grid-template-columns: repeat(3, 1fr); }
.stat-grid.four { grid-template-columns: repeat(4, 1fr); }

.stat-tile {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1.25rem;
}

.stat-value { font-size: var(--text-xl); font-weight: 700; }
.stat-label { color: var(--text-muted); font-size: var(--text-sm); }
.stat-icon { font-size: var(--text-lg); }

.list-row {
  padding: 0.875rem 0;
  border-bottom: 1px solid var(--border);
}

.total-row {
  padding-top: 1rem;
  border-top: 2px solid var(--border);
}

/* === Avatars === */
.avatar {
  width: 2.75rem;
  height: 2.75rem;
  flex-shrink: 0;
  border-radius: 999px;
  overflow: hidden;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--primary-soft);
  color: var(--primary);
  font-weight: 700;
}

.avatar img { width: 100%; height: 100%; object-fit: cover; }
.avatar-lg { width: 5rem; height: 5rem; font-size: var(--text-xl); }

/* === Badges === */
.badge {
  display: inline-flex;
  align-items: center;
  gap: 0.25rem;
  padding: 0.125rem 0.625rem;
  border-radius: 999px;
  font-size: var(--text-xs);
  font-weight: 600;
  white-space: nowrap;
}

.badge-neutral { background: var(--surface-muted); color: var(--text-muted); }
.badge-primary { background: var(--primary-soft); color: var(--primary); }
.badge-success { background: var(--success-soft); color: var(--success); }
.badge-warning { background: var(--warning-soft); color: var(--warning); }
.badge-outline { border: 1px solid var(--border); color: var(--text); }

/* === Progress === */
.progress {
  display: flex;
  flex-direction: column;
  gap: 0.375rem;
}

.progress-track {
  height: 0.5rem;
  border-radius: 999px;
  background: var(--surface-muted);
  overflow: hidden;
}

.progress-fill {
  height: 100%;
  border-radius: 999px;
  background: var(--gradient);
  transition: width var(--transition-normal);
}

.progress-caption {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

/* === Forms === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.375rem;
}

.input-label {
  font-size: var(--text-sm);
  font-weight: 600;
}

.input-hint {
  color: var(--text-muted);
  font-weight: 400;
}

.input-field {
  width: 100%;
  padding: 0.625rem 0.875rem;
  border: 1px solid var(--border);
  border-radius: var(--radius-sm);
  background: var(--surface);
  color: var(--text);
  font: inherit;
  font-size: var(--text-sm);
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.input-field:focus {
  outline: none;
  border-color: var(--primary);
  box-shadow: 0 0 0 3px var(--primary-soft);
}

.input-field:disabled {
  background: var(--surface-muted);
  color: var(--text-muted);
}

.textarea { resize: vertical; min-height: 5rem; }
.select { appearance: auto; }

.checkbox-field {
  display: flex;
  align-items: flex-start;
  gap: 0.625rem;
}

.checkbox {
  margin-top: 0.2rem;
  width: 1rem;
  height: 1rem;
  accent-color: var(--primary);
}

.checkbox-label {
  font-size: var(--text-sm);
  line-height: 1.5;
}

.with-action {
  display: flex;
  align-items: flex-end;
  gap: 0.5rem;
}

.with-action .form-field { flex: 1; }

.filter { min-width: 12rem; }

/* === Dialog === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  background: rgba(15, 23, 42, 0.5);
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1.5rem;
  animation: fade-in var(--transition-fast);
}

.modal {
  width: 100%;
  max-width: 520px;
  max-height: 90vh;
  overflow-y: auto;
  background: var(--surface);
  border-radius: var(--radius);
  box-shadow: var(--shadow-lg);
  padding: 1.5rem;
}

.modal-header {
  display: flex;
  flex-direction: column;
  gap: 0.375rem;
  margin-bottom: 1.25rem;
  padding-right: 2rem;
  position: relative;
}

.modal-header .close-btn {
  position: absolute;
  top: -0.25rem;
  right: -0.5rem;
}

.modal-title { font-size: var(--text-lg); font-weight: 700; }
.modal-description { color: var(--text-muted); font-size: var(--text-sm); }

/* === Toasts === */
.toast-stack {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  z-index: 100;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  width: min(380px, calc(100vw - 3rem));
}

.toast {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
  padding: 1rem;
  border-radius: var(--radius);
  background: var(--surface);
  border: 1px solid var(--border);
  border-left-width: 4px;
  box-shadow: var(--shadow-lg);
  animation: slide-in var(--transition-normal);
}

.toast-success { border-left-color: var(--success); }
.toast-error { border-left-color: var(--danger); }

.toast-body { flex: 1; }
.toast-title { font-weight: 600; font-size: var(--text-sm); }
.toast-description { color: var(--text-muted); font-size: var(--text-sm); margin-top: 0.25rem; }

/* === Landing === */
.landing {
  position: relative;
  min-height: 100vh;
  overflow: hidden;
  display: flex;
  align-items: center;
  justify-content: center;
  background: radial-gradient(ellipse at top, #1e1b4b 0%, #0f172a 60%, #020617 100%);
  color: var(--text-inverse);
}

.chain-nodes {
  position: absolute;
  inset: 0;
  pointer-events: none;
}

.chain-node {
  position: absolute;
  width: 0.75rem;
  height: 0.75rem;
  border-radius: 3px;
  border: 1px solid rgba(96, 165, 250, 0.6);
  box-shadow: 0 0 12px rgba(96, 165, 250, 0.5);
  animation: pulse 4s ease-in-out infinite;
}

.particle {
  position: absolute;
  width: 3px;
  height: 3px;
  border-radius: 999px;
  background: rgba(167, 139, 250, 0.8);
  animation: drift 10s linear infinite;
}

.landing-content {
  position: relative;
  z-index: 1;
  text-align: center;
  padding: 2rem;
}

.landing-content > * + * { margin-top: 1.5rem; }

.landing-title {
  font-size: 4.5rem;
  font-weight: 800;
  letter-spacing: -0.03em;
  background: linear-gradient(135deg, #60a5fa 0%, #a78bfa 100%);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.landing-tagline {
  max-width: 36rem;
  margin-left: auto;
  margin-right: auto;
  font-size: var(--text-lg);
  color: rgba(255, 255, 255, 0.75);
}

.landing-actions {
  display: flex;
  justify-content: center;
  gap: 1rem;
}

.landing-login {
  background: rgba(255, 255, 255, 0.08);
  border-color: rgba(255, 255, 255, 0.3);
  color: var(--text-inverse);
  min-width: 9rem;
}

.landing-register {
  background: var(--gradient);
  color: var(--text-inverse);
  min-width: 9rem;
}

.landing-more {
  display: inline-block;
  color: rgba(255, 255, 255, 0.6);
  font-size: var(--text-sm);
}

.landing-more:hover { color: var(--text-inverse); }

/* === Home === */
.hero {
  background: var(--gradient-soft);
  padding: 3rem 0 4rem;
}

.hero-grid {
  display: grid;
  grid-template-columns: 1.2fr 1fr;
  gap: 3rem;
  align-items: center;
}

.hero-art {
  position: relative;
  min-height: 16rem;
}

.hero-art-card {
  position: absolute;
  top: 2rem;
  left: 0;
  padding: 1.25rem 1.5rem;
  border-radius: var(--radius);
  background: var(--surface);
  box-shadow: var(--shadow-lg);
  font-weight: 600;
}

.hero-art-card.offset {
  top: 8rem;
  left: 30%;
  color: var(--primary);
}

.hero-panel {
  background: var(--gradient-soft);
  border-radius: var(--radius);
  padding: 2.5rem;
}

.band { padding: 4rem 0; }
.band .container { padding-top: 0; }
.muted-bg { background: var(--surface-muted); }

.feature-card { height: 100%; }

.feature-icon,
.step-icon {
  width: 3rem;
  height: 3rem;
  border-radius: var(--radius-sm);
  background: var(--gradient);
  color: var(--text-inverse);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.5rem;
}

.step-icon {
  margin: 0 auto;
  border-radius: 999px;
  width: 4rem;
  height: 4rem;
}

.feature-title { font-size: var(--text-lg); font-weight: 700; }

@media (max-width: 900px) {
  .hero-grid { grid-template-columns: 1fr; }
  .hero-art { display: none; }
}

/* === Auth === */
.auth-center {
  display: flex;
  justify-content: center;
  padding: 3rem 1.5rem;
}

.auth-card {
  width: 100%;
  max-width: 440px;
}

.auth-card > * + * { margin-top: 1.5rem; }
.auth-card.wide { max-width: 680px; }

.wallet-hero { font-size: 3rem; }

.wallet-option {
  width: 100%;
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 1rem 1.25rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: var(--surface);
  font: inherit;
  text-align: left;
  cursor: pointer;
  transition: border-color var(--transition-fast), background var(--transition-fast);
}

.wallet-option:hover:not(:disabled) { border-color: var(--primary); background: var(--primary-soft); }
.wallet-option:disabled { cursor: progress; opacity: 0.7; }
.wallet-option.connected { border-color: var(--success); background: var(--success-soft); }
.wallet-icon { font-size: 1.5rem; }
.wallet-status { margin-left: auto; }

.wallet-row {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.625rem 0.875rem;
  background: var(--surface-muted);
  border-radius: var(--radius-sm);
  overflow-x: auto;
}

/* === Communities === */
.community-head,
.profile-head {
  display: flex;
  align-items: center;
  gap: 1.5rem;
}

.member-card {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.member-card > * + * { margin-top: 0; }

/* === Campaigns === */
.campaign-tile { padding: 0; overflow: hidden; }
.campaign-tile > * { margin-left: 1.25rem; margin-right: 1.25rem; }
.campaign-tile > :last-child { margin-bottom: 1.25rem; }

.tile-image {
  position: relative;
  margin: 0 !important;
  height: 12rem;
  background: var(--gradient-soft);
}

.tile-image img { width: 100%; height: 100%; object-fit: cover; }

.tile-badge {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
}

.tile-title { font-size: var(--text-lg); font-weight: 700; margin-top: 1rem; }

.hero-image {
  width: 100%;
  height: 18rem;
  object-fit: cover;
  border-radius: var(--radius);
}

.milestone-row {
  display: flex;
  align-items: flex-start;
  gap: 1rem;
  padding: 1rem;
  border: 1px solid var(--border);
  border-radius: var(--radius-sm);
}

.milestone-row.current {
  border-color: var(--primary);
  background: var(--primary-soft);
}

.milestone-number {
  width: 2rem;
  height: 2rem;
  flex-shrink: 0;
  border-radius: 999px;
  background: var(--primary);
  color: var(--text-inverse);
  display: flex;
  align-items: center;
  justify-content: center;
  font-weight: 700;
  font-size: var(--text-sm);
}

.milestone-draft {
  display: grid;
  grid-template-columns: 2fr 1fr 1fr auto;
  gap: 0.5rem;
  align-items: center;
}

.update-row {
  padding-left: 1rem;
  border-left: 3px solid var(--primary);
}

.update-row > * + * { margin-top: 0.5rem; }

.update-image {
  width: 12rem;
  height: 8rem;
  object-fit: cover;
  border-radius: var(--radius-sm);
}

/* === Not Found === */
.not-found { padding-top: 6rem; }

/* === Animations === */
@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes slide-in {
  from { opacity: 0; transform: translateY(0.75rem); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes pulse {
  0%, 100% { opacity: 0.3; transform: scale(1); }
  50% { opacity: 1; transform: scale(1.3); }
}

@keyframes drift {
  from { transform: translateY(0); opacity: 0; }
  20% { opacity: 1; }
  to { transform: translateY(-120px); opacity: 0; }
}
"#;
