//! Raw template text for every scaffoldable artifact.
//!
//! Templates are compile-time string constants. Each entity kind's pair
//! carries exactly one placeholder token; the tokens are long, kind-specific
//! marker strings so a literal replace-all can never misfire on a partial
//! match. Substitution is case-sensitive and has no escaping mechanism.
//!
//! The generated code targets the C++ simulation framework the projects
//! build against: agents subclass `Agent`, carry a `State`, and exchange
//! `Event`s through the kernel.

// ── Placeholder tokens ────────────────────────────────────────────────────────

pub const AGENT_TOKEN: &str = "AGENT_NAME_HERE";
pub const STATE_TOKEN: &str = "STATE_NAME_HERE";
pub const EVENT_TOKEN: &str = "EVENT_NAME_HERE";
pub const PROJECT_TOKEN: &str = "PROJECT_NAME_HERE";
pub const SIM_PATH_TOKEN: &str = "SIM_PATH_HERE";
pub const SOURCES_TOKEN: &str = "ALL_SOURCES_HERE";

// ── Header templates ──────────────────────────────────────────────────────────

pub const AGENT_HEADER: &str = r#"#ifndef AGENT_NAME_HERE_H
#define AGENT_NAME_HERE_H

/*
    File: AGENT_NAME_HERE.h
    Author: your name

    ....give a brief description of what this agent does here....
*/

#include "Agent.h"
#include "State.h"
#include "DataTypes.h"

using namespace sim;

class AGENT_NAME_HERE : public Agent {
public:
    AGENT_NAME_HERE(AgentID id, State* state);
    void initialize();
    void executeTask(const EventContainer* events);
    void finalize();
    ~AGENT_NAME_HERE();
};

#endif /* AGENT_NAME_HERE_H */
"#;

pub const STATE_HEADER: &str = r#"#ifndef STATE_NAME_HERE_H
#define STATE_NAME_HERE_H

/*
    File: STATE_NAME_HERE.h
    Author: your name

    ....give a brief description of what this state contains here....
*/

#include "State.h"

using namespace sim;

class STATE_NAME_HERE : public State {
public:
    STATE_NAME_HERE();
    State* getClone();
    ~STATE_NAME_HERE();
};

#endif /* STATE_NAME_HERE_H */
"#;

pub const EVENT_HEADER: &str = r#"#ifndef EVENT_NAME_HERE_H
#define EVENT_NAME_HERE_H

/*
    File: EVENT_NAME_HERE.h
    Author: your name

    ....give a brief description of what this event means here....
*/

#include "Event.h"
#include "DataTypes.h"

using namespace sim;

class EVENT_NAME_HERE : public Event {
public:
    EVENT_NAME_HERE();

    /** Needed by the simulation kernel, do not erase.
        You can however do custom event size calculations.
    */
    inline int getEventSize() { return sizeof(EVENT_NAME_HERE); }

    ~EVENT_NAME_HERE();
};

#endif /* EVENT_NAME_HERE_H */
"#;

// ── Implementation templates ──────────────────────────────────────────────────

pub const AGENT_SOURCE: &str = r#"#include "AGENT_NAME_HERE.h"

AGENT_NAME_HERE::AGENT_NAME_HERE(AgentID id, State* state) : Agent(id, state) {
    // insert ctor code here
}

void
AGENT_NAME_HERE::initialize() {
    // insert your init code here
}

void
AGENT_NAME_HERE::executeTask(const EventContainer* events) {
    // uncomment the following loop for event processing:
    // for (EventContainer::const_iterator it = events->begin();
    //      it != events->end(); it++) {
    //     Event* current_event = (*it);
    //     // ...do something with current_event here...
    // }
}

void
AGENT_NAME_HERE::finalize() {
    // insert final code here
}

AGENT_NAME_HERE::~AGENT_NAME_HERE() {
    // insert dtor code here
}
"#;

pub const STATE_SOURCE: &str = r#"#include "STATE_NAME_HERE.h"

STATE_NAME_HERE::STATE_NAME_HERE() {
    // insert ctor code here
}

State*
STATE_NAME_HERE::getClone() {
    // Clone this state object. Shallow copy works for primitive members;
    // pointer or class members need a deep copy.
}

STATE_NAME_HERE::~STATE_NAME_HERE() {
    // insert dtor code here
}
"#;

pub const EVENT_SOURCE: &str = r#"#include "EVENT_NAME_HERE.h"

EVENT_NAME_HERE::EVENT_NAME_HERE() {
    // insert ctor code here
}

EVENT_NAME_HERE::~EVENT_NAME_HERE() {
    // insert dtor code here
}
"#;

// ── Entry-point template ──────────────────────────────────────────────────────

/// Project `main` skeleton. Written verbatim — this template carries no
/// placeholder token.
pub const MAIN_SOURCE: &str = r#"/*
    Simulation driver entry point.

    Register your agents with the kernel inside main() before calling
    start(). See the framework examples for registration patterns.
*/

#include "Simulation.h"

using namespace sim;

int main(int argc, char* argv[]) {
    Simulation* kernel = Simulation::getSimulator();
    kernel->initialize(argc, argv);

    // Register agents here:
    //   MyAgent* agent = new MyAgent(id, new MyAgentState());
    //   kernel->registerAgent(agent);

    kernel->setStartTime(0);
    kernel->setStopTime(100);
    kernel->start();
    kernel->finalize();
    return 0;
}
"#;

// ── Build descriptor template ─────────────────────────────────────────────────

/// Automake fragment for the project. The three computed fields are the
/// framework install root, the project name, and the space-joined relative
/// source list; everything else is fixed by this template.
pub const BUILD_DESCRIPTOR: &str = "AM_CXXFLAGS += -ISIM_PATH_HERE/include -I./agents/include -I./events/include -I./states/include

bin_PROGRAMS = PROJECT_NAME_HEREexec

PROJECT_NAME_HEREexec_LDFLAGS = -LSIM_PATH_HERE/kernel
PROJECT_NAME_HEREexec_LDADD = -lsim

PROJECT_NAME_HEREexec_SOURCES = \\
\tALL_SOURCES_HERE

# end of Makefile.am
";
